//! Loan amortization schedules under straight-line and annuity repayment,
//! with summary statistics and table, HTML, JSON and CSV renderers.

pub mod error;
pub mod export;
pub mod loan;
pub mod summary;

pub use error::AmortizationError;
pub use loan::{generate, LoanParameters, Method, PeriodRecord, Schedule};
pub use summary::{summarize, Summary};
