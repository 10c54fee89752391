//! cambio-providers
//!
//! HTTP rate providers implementing `RateProvider` against public upstreams:
//!
//! - [`FrankfurterProvider`]: the Frankfurter API (`/latest?from=..&to=..`), which
//!   filters symbols server side.
//! - [`FreeCurrencyProvider`]: the Free Currency Rates API
//!   (`/currencies/{base}.json`), which always returns the full table and is filtered
//!   locally.
//!
//! Every transport, status or decode problem is reported as `CambioError::Connector`
//! so the engine can count it as a failure and keep going.
#![warn(missing_docs)]

mod builder;
mod frankfurter;
mod free_currency;
mod http;

pub use builder::HttpProviderBuilder;
pub use frankfurter::FrankfurterProvider;
pub use free_currency::FreeCurrencyProvider;
