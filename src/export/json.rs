use crate::error::AmortizationError;
use crate::loan::Schedule;
use crate::summary::Summary;

/// Schedule as a JSON array of period records.
pub fn schedule_to_json(schedule: &Schedule) -> Result<String, AmortizationError> {
    Ok(serde_json::to_string(schedule.records())?)
}

pub fn summary_to_json(summary: &Summary) -> Result<String, AmortizationError> {
    Ok(serde_json::to_string(summary)?)
}

#[cfg(test)]
mod tests {
    use super::{schedule_to_json, summary_to_json};
    use crate::loan::{LoanParameters, Method, PeriodRecord};
    use serde_json::{json, Value};
    use test_log::test;

    #[test]
    fn test_schedule_to_json() {
        let schedule = LoanParameters::new(1200., 3, 12.)
            .unwrap()
            .schedule(Method::Annuity)
            .unwrap();
        let text = schedule_to_json(&schedule).unwrap();

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value[0],
            json!({
                "period_number": 1,
                "payment": 408.03,
                "principal_payment": 396.03,
                "interest_payment": 12.0,
                "remaining_balance": 803.97
            })
        );

        let records: Vec<PeriodRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(records, schedule.records());
    }

    #[test]
    fn test_summary_to_json() {
        let summary = LoanParameters::new(100000., 18, 6.)
            .unwrap()
            .summary(Method::Annuity)
            .unwrap();
        let value: Value = serde_json::from_str(&summary_to_json(&summary).unwrap()).unwrap();
        assert_eq!(value["total_interest_exp"], json!(4817.12));
        assert_eq!(value["average_monthly_pmt"], json!(5823.17));
        assert_eq!(value["average_interest_exp"], json!(267.62));
    }
}
