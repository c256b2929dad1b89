//! exchange-rates CLI - query a bootstrapped rate store from the command line
//!
//! ## Example Usage
//!
//! ```bash
//! # Latest CHF/USD rate
//! exchange-rates --data-dir data latest CHF
//!
//! # All rates in [2017-01-01, 2017-02-01)
//! exchange-rates --data-dir data range CHF 2017-01-01 2017-02-01
//!
//! # Every currency's rate on a day
//! exchange-rates --data-dir data day 2017-01-06
//! ```

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use exchange_rates::prelude::*;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

/// Query historical USD exchange rates loaded from CSV files
#[derive(Parser)]
#[command(name = "exchange-rates")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Query historical USD exchange rates", long_about = None)]
struct Cli {
    /// Directory holding the {CODE}USD.csv bootstrap files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the most recent rate for a currency
    Latest {
        #[arg(value_parser = parse_currency)]
        currency: Currency,
    },
    /// Show the rate for a currency on an exact date
    Rate {
        #[arg(value_parser = parse_currency)]
        currency: Currency,
        date: NaiveDate,
    },
    /// Show all rates with from <= date < to
    Range {
        #[arg(value_parser = parse_currency)]
        currency: Currency,
        from: NaiveDate,
        to: NaiveDate,
    },
    /// Show every supported currency's rate on a day
    Day { date: NaiveDate },
    /// List the supported currencies
    Currencies,
}

fn parse_currency(s: &str) -> std::result::Result<Currency, String> {
    Currency::from_code(s).ok_or_else(|| format!("unknown currency code: {}", s))
}

fn run(cli: Cli) -> Result<()> {
    let store = CsvRateLoader::new(&cli.data_dir).load()?;
    let service = RatesService::new(Arc::new(store));
    let base = REFERENCE_CURRENCY;

    match cli.command {
        Command::Latest { currency } => {
            let er = service.latest(base, currency)?;
            println!("{}/{} {} {}", currency, base, er.date, er.rate);
        }
        Command::Rate { currency, date } => {
            let er = service.rate_on(base, currency, date)?;
            println!("{}/{} {} {}", currency, base, er.date, er.rate);
        }
        Command::Range { currency, from, to } => {
            for er in service.range(base, currency, from, to)? {
                println!("{}/{} {} {}", currency, base, er.date, er.rate);
            }
        }
        Command::Day { date } => {
            let snapshot = service.rates_for_day(base, date)?;
            let mut currencies: Vec<Currency> = snapshot.keys().copied().collect();
            currencies.sort_by_key(|c| c.code());
            for currency in currencies {
                println!("{}/{} {}", currency, base, snapshot[&currency].rate);
            }
        }
        Command::Currencies => {
            for currency in service.currencies() {
                println!("{}", currency);
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
