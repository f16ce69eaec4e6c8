//! Renderers that turn a [`Schedule`](crate::loan::Schedule) or
//! [`Summary`](crate::summary::Summary) into tables, markup, JSON or CSV files.

pub mod csv;
pub mod html;
#[cfg(feature = "serde")]
pub mod json;
pub mod table;

use crate::loan::PeriodRecord;
use crate::summary::Summary;

/// Column labels of a rendered schedule, in output order.
pub const SCHEDULE_COLUMNS: [&str; 5] = [
    "Month:Period",
    "Amortization",
    "Interest expense",
    "Payment",
    "Remaining debt",
];

pub(crate) fn record_fields(record: &PeriodRecord) -> [String; 5] {
    [
        record.period_number.to_string(),
        format!("{:.2}", record.principal_payment),
        format!("{:.2}", record.interest_payment),
        format!("{:.2}", record.payment),
        format!("{:.2}", record.remaining_balance),
    ]
}

pub(crate) fn summary_fields(summary: &Summary) -> [(&'static str, String); 4] {
    [
        ("total_cost", format!("{:.2}", summary.total_cost)),
        (
            "average_interest_exp",
            format!("{:.2}", summary.average_interest_exp),
        ),
        (
            "average_monthly_pmt",
            format!("{:.2}", summary.average_monthly_pmt),
        ),
        (
            "total_interest_exp",
            format!("{:.2}", summary.total_interest_exp),
        ),
    ]
}
