//! # exchange-rates
//!
//! An in-memory store of historical currency exchange rates against a fixed
//! USD reference, built for a read-heavy rates API: point lookup, "latest"
//! lookup, half-open date-range queries, a day snapshot across currencies,
//! and a conflict-aware idempotent insert.
//!
//! The supported currency set is frozen at bootstrap; each currency's
//! series is independently synchronized, so concurrent readers and writers
//! of different currencies never contend.
//!
//! ## Example
//!
//! ```rust
//! use exchange_rates::prelude::*;
//! use chrono::NaiveDate;
//! use std::sync::Arc;
//!
//! let store = RateStore::with_currencies([Currency::CHF]);
//! let service = RatesService::new(Arc::new(store));
//!
//! let day = NaiveDate::from_ymd_opt(2017, 1, 6).unwrap();
//! service.insert(Currency::USD, Currency::CHF, day, 1.03)?;
//!
//! let latest = service.latest(Currency::USD, Currency::CHF)?;
//! assert_eq!(latest.rate, 1.03);
//! # Ok::<(), exchange_rates::error::RateError>(())
//! ```

pub mod bootstrap;
pub mod currency;
pub mod error;
pub mod series;
pub mod service;
pub mod store;
pub mod types;

pub mod prelude {
    //! Commonly used types
    pub use crate::bootstrap::CsvRateLoader;
    pub use crate::currency::Currency;
    pub use crate::error::{RateError, Result};
    pub use crate::series::RateSeries;
    pub use crate::service::{RatesService, REFERENCE_CURRENCY};
    pub use crate::store::RateStore;
    pub use crate::types::{ExchangeRate, Rate};
}
