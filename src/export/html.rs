use super::{record_fields, summary_fields, SCHEDULE_COLUMNS};
use crate::loan::Schedule;
use crate::summary::Summary;

const TABLE_OPEN: &str = "<table border=\"1\" class=\"dataframe\">\n";

fn push_header(html: &mut String, labels: &[&str]) {
    html.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n");
    for label in labels {
        html.push_str(&format!("      <th>{}</th>\n", label));
    }
    html.push_str("    </tr>\n  </thead>\n");
}

/// Schedule as an HTML table, one `<tr>` per period.
pub fn schedule_to_html(schedule: &Schedule) -> String {
    let mut html = String::from(TABLE_OPEN);
    push_header(&mut html, &SCHEDULE_COLUMNS);

    html.push_str("  <tbody>\n");
    for record in schedule {
        html.push_str("    <tr>\n");
        for value in record_fields(record) {
            html.push_str(&format!("      <td>{}</td>\n", value));
        }
        html.push_str("    </tr>\n");
    }
    html.push_str("  </tbody>\n</table>");
    html
}

pub fn summary_to_html(summary: &Summary) -> String {
    let mut html = String::from(TABLE_OPEN);
    push_header(&mut html, &["Statistic", "Value"]);

    html.push_str("  <tbody>\n");
    for (name, value) in summary_fields(summary) {
        html.push_str(&format!(
            "    <tr>\n      <th>{}</th>\n      <td>{}</td>\n    </tr>\n",
            name, value
        ));
    }
    html.push_str("  </tbody>\n</table>");
    html
}
