//! Statutory rate tables for the payroll engine.
//!
//! The tables are shipped as an embedded YAML document and parsed once into
//! immutable [`StatutoryRates`], which the calculator then owns.
//!
//! # Example
//!
//! ```
//! use kenya_payroll::config::ConfigLoader;
//!
//! let rates = ConfigLoader::kenya().unwrap().into_rates();
//! println!("Loaded rates for {}", rates.jurisdiction);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    FeeBand, HousingLevyConfig, NhifConfig, NhifTable, NssfConfig, NssfTier, PayBands, PayeConfig,
    StatutoryRates, TaxBand,
};
