//! ISO 4217 currency codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency enumeration (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    USD, // US Dollar (reference currency)
    EUR, // Euro
    GBP, // British Pound
    JPY, // Japanese Yen
    CHF, // Swiss Franc
    CAD, // Canadian Dollar
    AUD, // Australian Dollar
    NZD, // New Zealand Dollar
    CNY, // Chinese Yuan
    HKD, // Hong Kong Dollar
    SGD, // Singapore Dollar
    KRW, // South Korean Won
    INR, // Indian Rupee
    NOK, // Norwegian Krone
    SEK, // Swedish Krona
    DKK, // Danish Krone
    THB, // Thai Baht
    TWD, // New Taiwan Dollar
    ZAR, // South African Rand
}

impl Currency {
    /// Parse a currency from its ISO code, case-insensitively
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CHF" => Some(Currency::CHF),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "NZD" => Some(Currency::NZD),
            "CNY" => Some(Currency::CNY),
            "HKD" => Some(Currency::HKD),
            "SGD" => Some(Currency::SGD),
            "KRW" => Some(Currency::KRW),
            "INR" => Some(Currency::INR),
            "NOK" => Some(Currency::NOK),
            "SEK" => Some(Currency::SEK),
            "DKK" => Some(Currency::DKK),
            "THB" => Some(Currency::THB),
            "TWD" => Some(Currency::TWD),
            "ZAR" => Some(Currency::ZAR),
            _ => None,
        }
    }

    /// Get the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::NZD => "NZD",
            Currency::CNY => "CNY",
            Currency::HKD => "HKD",
            Currency::SGD => "SGD",
            Currency::KRW => "KRW",
            Currency::INR => "INR",
            Currency::NOK => "NOK",
            Currency::SEK => "SEK",
            Currency::DKK => "DKK",
            Currency::THB => "THB",
            Currency::TWD => "TWD",
            Currency::ZAR => "ZAR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("CHF"), Some(Currency::CHF));
        assert_eq!(Currency::from_code("chf"), Some(Currency::CHF));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("XXX"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn test_code_round_trip() {
        for cur in [Currency::USD, Currency::CHF, Currency::TWD, Currency::NOK] {
            assert_eq!(Currency::from_code(cur.code()), Some(cur));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Currency::USD.to_string(), "USD");
        assert_eq!(format!("{}", Currency::SEK), "SEK");
    }
}
