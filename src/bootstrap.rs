//! Bootstrap loading of historical rates from CSV files
//!
//! Populates a [`RateStore`] once at process start from one CSV file per
//! currency, named `{CODE}USD.csv` (e.g. `CHFUSD.csv`): a header row
//! followed by `date,rate` rows with ISO 8601 dates. Loading is
//! best-effort: malformed rows are dropped and a missing per-currency file
//! leaves that currency supported but empty, so a partially bad data set
//! never prevents the process from starting.

use crate::currency::Currency;
use crate::error::Result;
use crate::series::RateSeries;
use crate::store::RateStore;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// The currency set loaded when none is configured
pub const DEFAULT_CURRENCIES: [Currency; 8] = [
    Currency::CHF,
    Currency::CNY,
    Currency::JPY,
    Currency::KRW,
    Currency::NOK,
    Currency::SEK,
    Currency::THB,
    Currency::TWD,
];

/// CSV bootstrap loader
///
/// # Example
/// ```no_run
/// use exchange_rates::bootstrap::CsvRateLoader;
///
/// let store = CsvRateLoader::new("data").load().unwrap();
/// ```
pub struct CsvRateLoader {
    data_dir: PathBuf,
    currencies: Vec<Currency>,
}

impl CsvRateLoader {
    /// Create a loader for the default currency set
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_currencies(data_dir, DEFAULT_CURRENCIES)
    }

    /// Create a loader for a specific currency set
    pub fn with_currencies(
        data_dir: impl Into<PathBuf>,
        currencies: impl IntoIterator<Item = Currency>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            currencies: currencies.into_iter().collect(),
        }
    }

    /// Load every configured currency and freeze the result into a store
    ///
    /// Fails only if the data directory itself is unusable; per-file and
    /// per-row problems degrade to warnings.
    pub fn load(&self) -> Result<RateStore> {
        fs::metadata(&self.data_dir)?;

        let series: Vec<(Currency, RateSeries)> = self
            .currencies
            .par_iter()
            .map(|&currency| (currency, self.load_series(currency)))
            .collect();

        let store = RateStore::new(series);
        log::info!(
            "bootstrapped {} rates across {} currencies from {}",
            store.num_entries(),
            self.currencies.len(),
            self.data_dir.display()
        );
        Ok(store)
    }

    /// Load one currency's series from `{CODE}USD.csv`, dropping bad rows
    fn load_series(&self, currency: Currency) -> RateSeries {
        let path = self.data_dir.join(format!("{}USD.csv", currency.code()));
        let mut rdr = match ReaderBuilder::new().has_headers(true).from_path(&path) {
            Ok(rdr) => rdr,
            Err(e) => {
                log::warn!("no rate data for {}: {} ({})", currency, e, path.display());
                return RateSeries::new();
            }
        };

        let mut series = RateSeries::new();
        for (row, result) in rdr.records().enumerate() {
            match result.ok().and_then(|record| Self::parse_row(&record)) {
                Some((date, rate)) => series.put(date, rate),
                None => log::debug!("dropping malformed row {} of {}", row + 2, path.display()),
            }
        }
        series
    }

    /// Parse one `date,rate` record; `None` for anything malformed
    fn parse_row(record: &csv::StringRecord) -> Option<(NaiveDate, f64)> {
        let date: NaiveDate = record.get(0)?.trim().parse().ok()?;
        let rate: f64 = record.get(1)?.trim().parse().ok()?;
        if !rate.is_finite() || rate <= 0.0 {
            return None;
        }
        Some((date, rate))
    }
}

/// Bootstrap a store from `data_dir` with the default currency set
pub fn load_default(data_dir: impl AsRef<Path>) -> Result<RateStore> {
    CsvRateLoader::new(data_dir.as_ref()).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn write_csv(dir: &TempDir, name: &str, body: &str) {
        let mut file = fs::File::create(dir.path().join(name)).unwrap();
        write!(file, "{}", body).unwrap();
    }

    #[test]
    fn test_loads_well_formed_file() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "CHFUSD.csv",
            "date,rate\n2017-01-06,1.03\n2017-01-07,1.02\n",
        );

        let store = CsvRateLoader::with_currencies(dir.path(), [Currency::CHF])
            .load()
            .unwrap();

        assert_eq!(store.num_entries(), 2);
        assert_eq!(store.get_latest(Currency::CHF).unwrap().date, day(2017, 1, 7));
        assert_eq!(store.get_rate(Currency::CHF, day(2017, 1, 6)).unwrap().rate, 1.03);
    }

    #[test]
    fn test_malformed_rows_are_dropped() {
        let dir = TempDir::new().unwrap();
        write_csv(
            &dir,
            "JPYUSD.csv",
            "date,rate\n\
             2017-01-06,0.0085\n\
             not-a-date,1.0\n\
             2017-01-07,not-a-number\n\
             2017-01-08\n\
             2017-01-09,-3.0\n\
             2017-01-10,0.0086\n",
        );

        let store = CsvRateLoader::with_currencies(dir.path(), [Currency::JPY])
            .load()
            .unwrap();

        assert_eq!(store.num_entries(), 2);
        assert_eq!(store.get_rate(Currency::JPY, day(2017, 1, 6)).unwrap().rate, 0.0085);
        assert_eq!(store.get_rate(Currency::JPY, day(2017, 1, 10)).unwrap().rate, 0.0086);
        assert_eq!(store.get_rate(Currency::JPY, day(2017, 1, 9)), None);
    }

    #[test]
    fn test_missing_file_leaves_currency_supported_but_empty() {
        let dir = TempDir::new().unwrap();
        write_csv(&dir, "CHFUSD.csv", "date,rate\n2017-01-06,1.03\n");

        let store =
            CsvRateLoader::with_currencies(dir.path(), [Currency::CHF, Currency::SEK])
                .load()
                .unwrap();

        assert!(store.is_supported(Currency::SEK));
        assert_eq!(store.get_latest(Currency::SEK), None);
        assert_eq!(store.num_entries(), 1);
    }

    #[test]
    fn test_missing_data_dir_fails() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("nope");

        assert!(CsvRateLoader::new(&gone).load().is_err());
    }

    #[test]
    fn test_default_currency_set() {
        let dir = TempDir::new().unwrap();

        let store = load_default(dir.path()).unwrap();
        let supported = store.supported_currencies();

        assert_eq!(supported.len(), DEFAULT_CURRENCIES.len());
        assert!(supported.contains(&Currency::CHF));
        assert!(supported.contains(&Currency::TWD));
        assert!(!supported.contains(&Currency::USD));
    }
}
