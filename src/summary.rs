use crate::error::AmortizationError;
use crate::loan::{round, Schedule, DEC_PLACES};
use log::debug;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Aggregate cost of a schedule, every value rounded to the cent.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    pub total_cost: f64,
    pub total_interest_exp: f64,
    pub average_monthly_pmt: f64,
    pub average_interest_exp: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total cost ${:.2}, total interest ${:.2}, average payment ${:.2}, average interest ${:.2}",
            self.total_cost,
            self.total_interest_exp,
            self.average_monthly_pmt,
            self.average_interest_exp
        )
    }
}

pub fn summarize(schedule: &Schedule) -> Result<Summary, AmortizationError> {
    if schedule.is_empty() {
        return Err(AmortizationError::EmptySchedule);
    }

    let (payments, interest) = schedule.iter().fold((0., 0.), |(pmt, int), record| {
        (pmt + record.payment, int + record.interest_payment)
    });
    let count = schedule.len() as f64;

    let total_cost = round(payments, DEC_PLACES);
    let total_interest_exp = round(interest, DEC_PLACES);
    let summary = Summary {
        total_cost,
        total_interest_exp,
        average_monthly_pmt: round(total_cost / count, DEC_PLACES),
        average_interest_exp: round(total_interest_exp / count, DEC_PLACES),
    };
    debug!("{} summary: {}", schedule.method(), summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::{summarize, Summary};
    use crate::error::AmortizationError;
    use crate::loan::{LoanParameters, Method, PeriodRecord, Schedule};
    use test_log::test;

    #[test]
    fn test_annuity_summary() {
        let loan = LoanParameters::new(100000., 18, 6.).unwrap();
        let summary = loan.summary(Method::Annuity).unwrap();
        assert_eq!(summary.total_interest_exp, 4817.12);
        assert_eq!(summary.average_monthly_pmt, 5823.17);
        assert_eq!(summary.average_interest_exp, 267.62);
        // the last payment carries the six cents of rounding drift
        assert_eq!(summary.total_cost, 104817.12);
    }

    #[test]
    fn test_straight_summary() {
        let loan = LoanParameters::new(100000., 18, 6.).unwrap();
        assert_eq!(
            loan.summary(Method::Straight).unwrap(),
            Summary {
                total_cost: 104750.,
                total_interest_exp: 4750.,
                average_monthly_pmt: 5819.44,
                average_interest_exp: 263.89,
            }
        );
    }

    #[test]
    fn test_summary_of_hand_built_schedule() {
        let schedule = Schedule::new(
            Method::Straight,
            vec![
                PeriodRecord::new(1, 412., 400., 12., 800.),
                PeriodRecord::new(2, 408., 400., 8., 400.),
                PeriodRecord::new(3, 404., 400., 4., 0.),
            ],
        );
        let summary = summarize(&schedule).unwrap();
        assert_eq!(summary.total_cost, 1224.);
        assert_eq!(summary.total_interest_exp, 24.);
        assert_eq!(summary.average_monthly_pmt, 408.);
        assert_eq!(summary.average_interest_exp, 8.);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = Schedule::new(Method::Annuity, Vec::new());
        assert!(matches!(
            summarize(&schedule),
            Err(AmortizationError::EmptySchedule)
        ));
    }
}
