//! Use-case layer over the rate store
//!
//! Enforces the preconditions the store documents but does not check
//! itself: the base currency of every call must equal the reference
//! currency, and range queries must be correctly ordered. An HTTP layer
//! (or the demo CLI) maps the resulting errors onto its own status codes.

use crate::currency::Currency;
use crate::error::{RateError, Result};
use crate::store::RateStore;
use crate::types::{ExchangeRate, Rate};
use chrono::NaiveDate;
use hashbrown::HashMap;
use std::sync::Arc;

/// The currency all stored rates are denominated against
pub const REFERENCE_CURRENCY: Currency = Currency::USD;

/// Exchange-rate operations as exposed to the API boundary
///
/// Cheap to clone; all clones share the same store.
#[derive(Debug, Clone)]
pub struct RatesService {
    store: Arc<RateStore>,
    base: Currency,
}

impl RatesService {
    /// Create a service over a bootstrapped store, based on
    /// [`REFERENCE_CURRENCY`]
    pub fn new(store: Arc<RateStore>) -> Self {
        Self {
            store,
            base: REFERENCE_CURRENCY,
        }
    }

    /// The supported currencies, sorted by ISO code
    pub fn currencies(&self) -> Vec<Currency> {
        self.store.supported_currencies()
    }

    /// Most recent rate for the currency against `base`
    pub fn latest(&self, base: Currency, currency: Currency) -> Result<ExchangeRate> {
        self.check_base(base)?;
        self.store
            .get_latest(currency)
            .ok_or(RateError::RateNotFound(currency))
    }

    /// Rate for the currency on an exact date
    pub fn rate_on(
        &self,
        base: Currency,
        currency: Currency,
        date: NaiveDate,
    ) -> Result<ExchangeRate> {
        self.check_base(base)?;
        self.store
            .get_rate(currency, date)
            .ok_or(RateError::RateNotFound(currency))
    }

    /// Rates for the currency with `from <= date < to`, ascending
    ///
    /// An unsupported currency yields an empty list; a reversed window is
    /// rejected with [`RateError::InvalidDateRange`].
    pub fn range(
        &self,
        base: Currency,
        currency: Currency,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ExchangeRate>> {
        self.check_base(base)?;
        if from > to {
            return Err(RateError::InvalidDateRange { from, to });
        }
        Ok(self.store.get_range(currency, from, to))
    }

    /// Every supported currency's rate on `day`
    ///
    /// Currencies with no entry for that day are omitted.
    pub fn rates_for_day(
        &self,
        base: Currency,
        day: NaiveDate,
    ) -> Result<HashMap<Currency, ExchangeRate>> {
        self.check_base(base)?;
        Ok(self
            .store
            .supported_currencies()
            .into_iter()
            .filter_map(|currency| {
                self.store
                    .get_rate(currency, day)
                    .map(|rate| (currency, rate))
            })
            .collect())
    }

    /// Insert a rate, subject to the store's conflict policy
    pub fn insert(
        &self,
        base: Currency,
        currency: Currency,
        date: NaiveDate,
        rate: Rate,
    ) -> Result<()> {
        self.check_base(base)?;
        self.store.insert(currency, date, rate)
    }

    fn check_base(&self, base: Currency) -> Result<()> {
        if base != self.base {
            return Err(RateError::UnsupportedBaseCurrency(base));
        }
        Ok(())
    }
}
