use crate::error::AmortizationError;
use crate::summary::{summarize, Summary};
use log::{debug, trace, warn};
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Money values are emitted to the cent.
pub const DEC_PLACES: i32 = 2;

/// Longest repayment plan accepted, in months.
pub const MAX_PERIOD: u32 = 12_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    /// Constant principal each period, declining payment.
    Straight,
    /// Constant payment each period.
    #[default]
    Annuity,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Straight => write!(f, "straight"),
            Method::Annuity => write!(f, "annuity"),
        }
    }
}

impl FromStr for Method {
    type Err = AmortizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "straight" => Ok(Method::Straight),
            "annuity" => Ok(Method::Annuity),
            _ => Err(AmortizationError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// Terms of a fixed-rate loan repaid monthly.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanParameters {
    pub amount: f64,        // loan principal
    pub period: u32,        // number of monthly payments
    pub interest_rate: f64, // nominal annual rate in percent (i.e., 6.0, 9.5)
}

impl LoanParameters {
    pub fn new(amount: f64, period: u32, interest_rate: f64) -> Result<Self, AmortizationError> {
        let params = Self {
            amount,
            period,
            interest_rate,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), AmortizationError> {
        let err = if !self.amount.is_finite() || self.amount <= 0. {
            Some(AmortizationError::invalid(
                "amount",
                format!("{} must be a positive number", self.amount),
            ))
        } else if self.period == 0 || self.period > MAX_PERIOD {
            Some(AmortizationError::invalid(
                "period",
                format!("{} must be between 1 and {} months", self.period, MAX_PERIOD),
            ))
        } else if !self.interest_rate.is_finite()
            || self.interest_rate < 0.
            || self.interest_rate > 100.
        {
            Some(AmortizationError::invalid(
                "interest_rate",
                format!("{} must be between 0 and 100 percent", self.interest_rate),
            ))
        } else {
            None
        };

        match err {
            Some(err) => {
                warn!("rejected loan parameters: {}", err);
                Err(err)
            }
            None => Ok(()),
        }
    }

    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100. / 12.
    }

    pub fn schedule(&self, method: Method) -> Result<Schedule, AmortizationError> {
        generate(self, method)
    }

    pub fn summary(&self, method: Method) -> Result<Summary, AmortizationError> {
        summarize(&generate(self, method)?)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PeriodRecord {
    pub period_number: u32,
    pub payment: f64,
    pub principal_payment: f64,
    pub interest_payment: f64,
    pub remaining_balance: f64,
}

impl PeriodRecord {
    pub fn new(
        period_number: u32,
        payment: f64,
        principal_payment: f64,
        interest_payment: f64,
        remaining_balance: f64,
    ) -> Self {
        Self {
            period_number,
            payment,
            principal_payment,
            interest_payment,
            remaining_balance,
        }
    }
}

impl fmt::Display for PeriodRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "period {}, payment ${:.2}, principal ${:.2}, interest ${:.2}, remaining balance ${:.2}",
            self.period_number,
            self.payment,
            self.principal_payment,
            self.interest_payment,
            self.remaining_balance
        )
    }
}

/// Period-by-period repayment plan, ordered by period number.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    method: Method,
    records: Vec<PeriodRecord>,
}

impl Schedule {
    pub fn new(method: Method, records: Vec<PeriodRecord>) -> Self {
        Self { method, records }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn records(&self) -> &[PeriodRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PeriodRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&PeriodRecord> {
        self.records.last()
    }

    pub fn into_records(self) -> Vec<PeriodRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a PeriodRecord;
    type IntoIter = std::slice::Iter<'a, PeriodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} amortization, {} periods", self.method, self.len())?;
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Rounds half away from zero and never returns negative zero.
pub fn round(amt: f64, dec: i32) -> f64 {
    if amt == 0. {
        return 0.;
    }
    let factor = 10_f64.powi(dec);
    let rounded = (amt * factor).round() / factor;
    if rounded == 0. {
        0.
    } else {
        rounded
    }
}

/// Level payment that repays `amount` over `period` months at `monthly_rate`.
pub fn annuity_payment(amount: f64, period: u32, monthly_rate: f64) -> f64 {
    if monthly_rate == 0. {
        return amount / period as f64;
    }
    // (1 + r)^n - 1, kept exact when r is too small for 1 + r to register
    let growth = (period as f64 * monthly_rate.ln_1p()).exp_m1();
    if growth == 0. {
        return amount / period as f64;
    }
    amount * monthly_rate * (1. + growth) / growth
}

/// Per-period share of `balance` rounded up to the cent.
fn straight_installment(balance: f64, period: u32) -> f64 {
    let cents = (balance * 10_f64.powi(DEC_PLACES)).round();
    (cents / period as f64).ceil() / 10_f64.powi(DEC_PLACES)
}

/// Builds the repayment schedule for `params` under `method`.
///
/// Every row is rounded to the cent and internally consistent
/// (`payment == principal_payment + interest_payment`). The last period repays
/// whatever balance is left, so rounding drift never leaves a residual debt.
/// The straight installment is rounded up, so that last period never pays more
/// principal than the ones before it.
pub fn generate(params: &LoanParameters, method: Method) -> Result<Schedule, AmortizationError> {
    params.validate()?;

    let period_rate = params.monthly_rate();
    let mut begin_balance = round(params.amount, DEC_PLACES);
    let installment = match method {
        Method::Straight => straight_installment(begin_balance, params.period),
        Method::Annuity => round(
            annuity_payment(params.amount, params.period, period_rate),
            DEC_PLACES,
        ),
    };
    debug!(
        "{} installment {} for {} over {} periods at {}%",
        method, installment, params.amount, params.period, params.interest_rate
    );

    let mut records = Vec::with_capacity(params.period as usize);

    for pmt_number in 1..=params.period {
        let interest = round(begin_balance * period_rate, DEC_PLACES);

        let principal = if pmt_number == params.period {
            begin_balance
        } else {
            let scheduled = match method {
                Method::Straight => installment,
                Method::Annuity => round(installment - interest, DEC_PLACES),
            };
            scheduled.clamp(0., begin_balance)
        };

        let payment = round(principal + interest, DEC_PLACES);
        let end_balance = if pmt_number == params.period {
            0.
        } else {
            round(begin_balance - principal, DEC_PLACES)
        };
        trace!(
            "pmt # {}, payment {}, principal {}, interest {}, end bal {}",
            pmt_number,
            payment,
            principal,
            interest,
            end_balance
        );

        records.push(PeriodRecord::new(
            pmt_number,
            payment,
            principal,
            interest,
            end_balance,
        ));
        begin_balance = end_balance;
    }

    Ok(Schedule::new(method, records))
}
