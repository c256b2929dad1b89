//! Currency-keyed rate store
//!
//! Maps each supported currency to its [`RateSeries`] and owns the
//! write-conflict policy. The currency set is frozen at construction: the
//! outer map is never mutated afterwards, so it needs no lock of its own.
//! Each series carries its own `RwLock`, keeping currencies independently
//! synchronized: a write to CHF never blocks a read of JPY, and the
//! check-then-write of [`RateStore::insert`] is atomic under the series'
//! write lock.

use crate::currency::Currency;
use crate::error::{RateError, Result};
use crate::series::RateSeries;
use crate::types::{ExchangeRate, Rate};
use chrono::NaiveDate;
use hashbrown::HashMap;
use std::sync::RwLock;

/// Store of per-currency rate series against the reference currency
///
/// Shared across threads behind an `Arc`; all operations take `&self`.
///
/// # Example
/// ```
/// use exchange_rates::currency::Currency;
/// use exchange_rates::store::RateStore;
/// use chrono::NaiveDate;
///
/// let store = RateStore::with_currencies([Currency::CHF]);
/// let day = NaiveDate::from_ymd_opt(2017, 1, 6).unwrap();
///
/// store.insert(Currency::CHF, day, 1.03).unwrap();
/// assert_eq!(store.get_latest(Currency::CHF).unwrap().rate, 1.03);
/// ```
#[derive(Debug)]
pub struct RateStore {
    series: HashMap<Currency, RwLock<RateSeries>>,
}

impl RateStore {
    /// Build a store from pre-populated per-currency series
    ///
    /// The given currencies become the supported set for the lifetime of
    /// the store.
    pub fn new(series: impl IntoIterator<Item = (Currency, RateSeries)>) -> Self {
        Self {
            series: series
                .into_iter()
                .map(|(currency, s)| (currency, RwLock::new(s)))
                .collect(),
        }
    }

    /// Build a store with an empty series per currency
    pub fn with_currencies(currencies: impl IntoIterator<Item = Currency>) -> Self {
        Self::new(
            currencies
                .into_iter()
                .map(|currency| (currency, RateSeries::new())),
        )
    }

    /// Whether the currency is in the supported set
    pub fn is_supported(&self, currency: Currency) -> bool {
        self.series.contains_key(&currency)
    }

    /// The supported currencies, sorted by ISO code
    pub fn supported_currencies(&self) -> Vec<Currency> {
        let mut currencies: Vec<Currency> = self.series.keys().copied().collect();
        currencies.sort_by_key(|c| c.code());
        currencies
    }

    /// Most recent rate for the currency
    ///
    /// `None` for an unsupported currency or an empty series.
    pub fn get_latest(&self, currency: Currency) -> Option<ExchangeRate> {
        self.series.get(&currency)?.read().unwrap().latest()
    }

    /// Rate for the currency on an exact date
    pub fn get_rate(&self, currency: Currency, date: NaiveDate) -> Option<ExchangeRate> {
        self.series.get(&currency)?.read().unwrap().get(date)
    }

    /// Rates for the currency with `from <= date < to`, ascending
    ///
    /// Empty for an unsupported currency. Callers must ensure `from <= to`.
    pub fn get_range(&self, currency: Currency, from: NaiveDate, to: NaiveDate) -> Vec<ExchangeRate> {
        match self.series.get(&currency) {
            Some(series) => series.read().unwrap().range(from, to),
            None => Vec::new(),
        }
    }

    /// Insert a rate for `(currency, date)`
    ///
    /// Idempotent on the exact same rate; a differing rate for an existing
    /// date is rejected with [`RateError::WriteConflict`] and the store is
    /// left unchanged. The supported-currency set is never grown by this
    /// path: an unsupported currency is rejected with
    /// [`RateError::UnsupportedCurrency`].
    pub fn insert(&self, currency: Currency, date: NaiveDate, rate: Rate) -> Result<()> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(RateError::InvalidRate(rate));
        }

        let series = self
            .series
            .get(&currency)
            .ok_or(RateError::UnsupportedCurrency(currency))?;

        // Holding the write lock across check and commit keeps the
        // conflict decision atomic with respect to concurrent inserts.
        let mut series = series.write().unwrap();
        match series.get(date) {
            None => {
                series.put(date, rate);
                Ok(())
            }
            Some(existing) if existing.rate == rate => Ok(()),
            Some(existing) => Err(RateError::WriteConflict {
                currency,
                date,
                existing: existing.rate,
                new: rate,
            }),
        }
    }

    /// Total number of rate entries across all currencies
    pub fn num_entries(&self) -> usize {
        self.series
            .values()
            .map(|series| series.read().unwrap().len())
            .sum()
    }
}
