//! Per-currency exchange-rate time series
//!
//! Ordered storage for one currency's rate history using a BTreeMap keyed by
//! date. BTreeMap gives logarithmic lookup and insert plus efficient ordered
//! range scans, which a plain hash map cannot provide without sorting on
//! every query.

use crate::types::{ExchangeRate, Rate};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Date-ordered rate history for a single currency
///
/// Holds at most one rate per calendar day. Insertion order is irrelevant;
/// retrieval is always date-ascending. The series itself is a plain data
/// structure: overwrite protection is enforced one layer up by
/// [`RateStore`](crate::store::RateStore).
///
/// # Example
/// ```
/// use exchange_rates::series::RateSeries;
/// use chrono::NaiveDate;
///
/// let mut series = RateSeries::new();
/// let day = NaiveDate::from_ymd_opt(2017, 1, 6).unwrap();
/// series.put(day, 1.03);
///
/// let latest = series.latest().unwrap();
/// assert_eq!(latest.date, day);
/// assert_eq!(latest.rate, 1.03);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSeries {
    rates: BTreeMap<NaiveDate, Rate>,
}

impl RateSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    /// Exact-date lookup
    pub fn get(&self, date: NaiveDate) -> Option<ExchangeRate> {
        self.rates
            .get(&date)
            .map(|&rate| ExchangeRate::new(date, rate))
    }

    /// The entry with the maximum date, if any
    pub fn latest(&self) -> Option<ExchangeRate> {
        self.rates
            .iter()
            .next_back()
            .map(|(&date, &rate)| ExchangeRate::new(date, rate))
    }

    /// All entries with `from <= date < to`, ascending by date
    ///
    /// The upper bound is exclusive, so `range(d, d)` is always empty.
    /// Callers must ensure `from <= to`; that precondition is enforced at
    /// the service boundary, not here.
    pub fn range(&self, from: NaiveDate, to: NaiveDate) -> Vec<ExchangeRate> {
        self.rates
            .range(from..to)
            .map(|(&date, &rate)| ExchangeRate::new(date, rate))
            .collect()
    }

    /// Insert or overwrite the entry for `date`
    pub fn put(&mut self, date: NaiveDate, rate: Rate) {
        self.rates.insert(date, rate);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Whether the series holds no entries
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterate all entries in date order
    pub fn iter(&self) -> impl Iterator<Item = ExchangeRate> + '_ {
        self.rates
            .iter()
            .map(|(&date, &rate)| ExchangeRate::new(date, rate))
    }
}

impl FromIterator<(NaiveDate, Rate)> for RateSeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, Rate)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}
