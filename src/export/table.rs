use super::{record_fields, summary_fields, SCHEDULE_COLUMNS};
use crate::loan::Schedule;
use crate::summary::Summary;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn amount_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// One row per period, columns in [`SCHEDULE_COLUMNS`] order.
pub fn schedule_table(schedule: &Schedule) -> Table {
    let mut table = new_styled_table();
    table.set_header(SCHEDULE_COLUMNS.iter().map(|c| header_cell(c)).collect::<Vec<_>>());

    for record in schedule {
        table.add_row(
            record_fields(record)
                .into_iter()
                .map(amount_cell)
                .collect::<Vec<_>>(),
        );
    }
    table
}

/// Two-column table of summary statistic name and value.
pub fn summary_table(summary: &Summary) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);

    for (name, value) in summary_fields(summary) {
        table.add_row(vec![Cell::new(name), amount_cell(value)]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::{schedule_table, summary_table};
    use crate::loan::{LoanParameters, Method};
    use comfy_table::Table;
    use test_log::test;

    fn contents(table: &Table) -> Vec<Vec<String>> {
        table
            .row_iter()
            .map(|row| row.cell_iter().map(|cell| cell.content()).collect())
            .collect()
    }

    #[test]
    fn test_schedule_table() {
        let schedule = LoanParameters::new(1200., 3, 12.)
            .unwrap()
            .schedule(Method::Straight)
            .unwrap();
        let table = schedule_table(&schedule);

        let header: Vec<String> = table
            .header()
            .unwrap()
            .cell_iter()
            .map(|cell| cell.content())
            .collect();
        assert_eq!(
            header,
            vec!["Month:Period", "Amortization", "Interest expense", "Payment", "Remaining debt"]
        );
        assert_eq!(
            contents(&table),
            vec![
                vec!["1", "400.00", "12.00", "412.00", "800.00"],
                vec!["2", "400.00", "8.00", "408.00", "400.00"],
                vec!["3", "400.00", "4.00", "404.00", "0.00"],
            ]
        );
    }

    #[test]
    fn test_summary_table() {
        let summary = LoanParameters::new(12000., 12, 0.)
            .unwrap()
            .summary(Method::Annuity)
            .unwrap();
        let rows = contents(&summary_table(&summary));
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec!["total_cost", "12000.00"]);
        assert_eq!(rows[2], vec!["average_monthly_pmt", "1000.00"]);
    }
}
