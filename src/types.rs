//! Core domain types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Exchange-rate multiplier (units of the reference currency per unit of
/// the quoted currency)
pub type Rate = f64;

/// A single observed exchange rate: one currency's value against the
/// reference currency on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Observation date
    pub date: NaiveDate,
    /// Rate against the reference currency
    pub rate: Rate,
}

impl ExchangeRate {
    /// Create a new exchange rate observation
    pub fn new(date: NaiveDate, rate: Rate) -> Self {
        Self { date, rate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_rate_construction() {
        let date = NaiveDate::from_ymd_opt(2017, 1, 6).unwrap();
        let er = ExchangeRate::new(date, 1.03);

        assert_eq!(er.date, date);
        assert_eq!(er.rate, 1.03);
    }

    #[test]
    fn test_exchange_rate_equality() {
        let date = NaiveDate::from_ymd_opt(2017, 1, 6).unwrap();

        assert_eq!(ExchangeRate::new(date, 1.03), ExchangeRate::new(date, 1.03));
        assert_ne!(ExchangeRate::new(date, 1.03), ExchangeRate::new(date, 1.04));
    }
}
