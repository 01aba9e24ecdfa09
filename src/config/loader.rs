//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! rate tables. The Kenyan tables are compiled into the crate; they are not
//! read from disk at runtime.

use crate::error::{EngineError, EngineResult};

use super::types::StatutoryRates;

/// The Kenyan rates document, embedded at compile time.
const KENYA_RATES_YAML: &str = include_str!("../../config/kenya/statutory_rates.yaml");

/// Name reported in parse errors for the embedded document.
const KENYA_RATES_SOURCE: &str = "config/kenya/statutory_rates.yaml";

/// Loads and provides access to statutory rates.
///
/// # Example
///
/// ```
/// use kenya_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::kenya().unwrap();
/// assert_eq!(loader.rates().jurisdiction, "Kenya");
/// assert_eq!(loader.rates().paye.bands.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: StatutoryRates,
}

impl ConfigLoader {
    /// Loads the embedded Kenyan statutory tables.
    pub fn kenya() -> EngineResult<Self> {
        Self::from_yaml_str(KENYA_RATES_SOURCE, KENYA_RATES_YAML)
    }

    /// Parses a rates document.
    ///
    /// # Arguments
    ///
    /// * `source_name` - Name used in error messages
    /// * `content` - The YAML document
    ///
    /// # Returns
    ///
    /// Returns an error if the YAML is malformed, a field is missing, or any
    /// band table violates its ordering rules.
    pub fn from_yaml_str(source_name: &str, content: &str) -> EngineResult<Self> {
        let rates = serde_yaml::from_str::<StatutoryRates>(content).map_err(|e| {
            EngineError::ConfigParseError {
                source_name: source_name.to_string(),
                message: e.to_string(),
            }
        })?;

        tracing::debug!(
            source = source_name,
            jurisdiction = %rates.jurisdiction,
            effective_date = %rates.effective_date,
            "Loaded statutory rates"
        );

        Ok(Self { rates })
    }

    /// Returns the loaded rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }

    /// Consumes the loader, returning the rates.
    pub fn into_rates(self) -> StatutoryRates {
        self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_kenya_rates_load() {
        let loader = ConfigLoader::kenya().unwrap();
        let rates = loader.rates();

        assert_eq!(rates.jurisdiction, "Kenya");
        assert_eq!(
            rates.effective_date,
            NaiveDate::from_ymd_opt(2023, 7, 1).unwrap()
        );
        assert_eq!(rates.paye.personal_relief, dec("2400"));
        assert_eq!(rates.housing_levy.rate, dec("0.015"));
        assert_eq!(rates.nssf.tier_1.limit, dec("6000"));
        assert_eq!(rates.nssf.tier_2.limit, dec("24000"));
        assert_eq!(rates.nssf.tier_1.rate, dec("0.06"));
    }

    #[test]
    fn test_kenya_paye_bands_are_cumulative() {
        let rates = ConfigLoader::kenya().unwrap().into_rates();
        let bounds: Vec<_> = rates.paye.bands.iter().map(|b| b.upper_bound).collect();
        assert_eq!(
            bounds,
            vec![
                Some(dec("24000")),
                Some(dec("56333")),
                Some(dec("500000")),
                Some(dec("800000")),
                None,
            ]
        );
        let rates: Vec<_> = rates.paye.bands.iter().map(|b| b.rate).collect();
        assert_eq!(
            rates,
            vec![dec("0.10"), dec("0.25"), dec("0.30"), dec("0.325"), dec("0.35")]
        );
    }

    #[test]
    fn test_kenya_nhif_table_has_unbounded_top_band() {
        let rates = ConfigLoader::kenya().unwrap().into_rates();
        assert_eq!(rates.nhif.bands.len(), 17);
        let top = rates.nhif.bands.iter().last().unwrap();
        assert_eq!(top.upper_bound, None);
        assert_eq!(top.fee, dec("1700"));
    }

    #[test]
    fn test_malformed_yaml_reports_source() {
        let err = ConfigLoader::from_yaml_str("broken.yaml", "jurisdiction: [").unwrap_err();
        match err {
            EngineError::ConfigParseError { source_name, .. } => {
                assert_eq!(source_name, "broken.yaml")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_section_is_parse_error() {
        let yaml = "jurisdiction: Kenya\neffective_date: 2023-07-01\n";
        let err = ConfigLoader::from_yaml_str("partial.yaml", yaml).unwrap_err();
        assert!(err.to_string().contains("partial.yaml"));
    }

    #[test]
    fn test_invalid_bands_surface_as_parse_error() {
        let yaml = KENYA_RATES_YAML.replace("upper_bound: \"56333\"", "upper_bound: \"20000\"");
        let err = ConfigLoader::from_yaml_str("edited.yaml", &yaml).unwrap_err();
        assert!(err.to_string().contains("must be greater than 24000"));
    }
}
