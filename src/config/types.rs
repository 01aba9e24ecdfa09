//! Configuration types for the statutory deduction tables.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the embedded YAML rates document. Band tables validate themselves
//! while being deserialized, so a parsed [`StatutoryRates`] always satisfies
//! the band invariants.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One marginal tax band.
///
/// `upper_bound` is the cumulative upper bound of the band. `None` marks the
/// final, unbounded band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    /// Cumulative upper bound of the band, or `None` for the final band.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Marginal rate applied to income inside the band.
    pub rate: Decimal,
}

/// One flat-fee band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBand {
    /// Inclusive upper bound of the band, or `None` for the final band.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Flat fee charged for amounts in the band.
    pub fee: Decimal,
}

/// Checks the shared band invariants: at least one band, strictly increasing
/// positive bounds, and exactly the final band unbounded.
fn validate_bounds(table: &str, bounds: &[Option<Decimal>]) -> EngineResult<()> {
    let invalid = |message: String| EngineError::InvalidBands {
        table: table.to_string(),
        message,
    };

    let Some((last, rest)) = bounds.split_last() else {
        return Err(invalid("at least one band is required".to_string()));
    };
    if last.is_some() {
        return Err(invalid("final band must be unbounded".to_string()));
    }

    let mut previous = Decimal::ZERO;
    for (index, bound) in rest.iter().enumerate() {
        let bound = bound.ok_or_else(|| {
            invalid(format!("band {} is unbounded but is not the final band", index + 1))
        })?;
        if bound <= previous {
            return Err(invalid(format!(
                "band {} upper bound {} must be greater than {}",
                index + 1,
                bound,
                previous
            )));
        }
        previous = bound;
    }

    Ok(())
}

/// Ordered marginal tax bands with strictly increasing cumulative bounds.
///
/// # Example
///
/// ```
/// use kenya_payroll::config::{PayBands, TaxBand};
/// use rust_decimal::Decimal;
///
/// let bands = PayBands::new(vec![
///     TaxBand { upper_bound: Some(Decimal::new(24000, 0)), rate: Decimal::new(10, 2) },
///     TaxBand { upper_bound: None, rate: Decimal::new(25, 2) },
/// ])
/// .unwrap();
/// assert_eq!(bands.len(), 2);
///
/// // The final band must be unbounded.
/// assert!(PayBands::new(vec![TaxBand {
///     upper_bound: Some(Decimal::new(24000, 0)),
///     rate: Decimal::new(10, 2),
/// }])
/// .is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBand>", into = "Vec<TaxBand>")]
pub struct PayBands(Vec<TaxBand>);

impl PayBands {
    /// Validates and wraps a list of tax bands.
    pub fn new(bands: Vec<TaxBand>) -> EngineResult<Self> {
        let bounds: Vec<_> = bands.iter().map(|b| b.upper_bound).collect();
        validate_bounds("PAYE", &bounds)?;

        if let Some(band) = bands
            .iter()
            .find(|b| b.rate < Decimal::ZERO || b.rate > Decimal::ONE)
        {
            return Err(EngineError::InvalidBands {
                table: "PAYE".to_string(),
                message: format!("rate {} is outside 0..=1", band.rate),
            });
        }

        Ok(Self(bands))
    }

    /// Iterates the bands in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, TaxBand> {
        self.0.iter()
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<TaxBand>> for PayBands {
    type Error = EngineError;

    fn try_from(bands: Vec<TaxBand>) -> EngineResult<Self> {
        Self::new(bands)
    }
}

impl From<PayBands> for Vec<TaxBand> {
    fn from(bands: PayBands) -> Self {
        bands.0
    }
}

/// Ordered NHIF fee bands; the final band is unbounded so every amount
/// matches exactly one band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FeeBand>", into = "Vec<FeeBand>")]
pub struct NhifTable(Vec<FeeBand>);

impl NhifTable {
    /// Validates and wraps a list of fee bands.
    pub fn new(bands: Vec<FeeBand>) -> EngineResult<Self> {
        let bounds: Vec<_> = bands.iter().map(|b| b.upper_bound).collect();
        validate_bounds("NHIF", &bounds)?;

        if let Some(band) = bands.iter().find(|b| b.fee < Decimal::ZERO) {
            return Err(EngineError::InvalidBands {
                table: "NHIF".to_string(),
                message: format!("fee {} must not be negative", band.fee),
            });
        }

        Ok(Self(bands))
    }

    /// Iterates the bands in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, FeeBand> {
        self.0.iter()
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated table.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<FeeBand>> for NhifTable {
    type Error = EngineError;

    fn try_from(bands: Vec<FeeBand>) -> EngineResult<Self> {
        Self::new(bands)
    }
}

impl From<NhifTable> for Vec<FeeBand> {
    fn from(table: NhifTable) -> Self {
        table.0
    }
}

/// PAYE configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeConfig {
    /// Monthly personal relief subtracted from the gross tax.
    pub personal_relief: Decimal,
    /// Marginal bands.
    pub bands: PayBands,
}

/// NHIF configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NhifConfig {
    /// Fee bands.
    pub bands: NhifTable,
}

/// A single NSSF contribution tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NssfTier {
    /// Width of pensionable pay covered by the tier.
    pub limit: Decimal,
    /// Contribution rate for the tier.
    pub rate: Decimal,
}

/// NSSF configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NssfConfig {
    /// Tier I, covering pay up to its limit.
    pub tier_1: NssfTier,
    /// Tier II, covering the next `limit` above Tier I.
    pub tier_2: NssfTier,
}

/// Housing levy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingLevyConfig {
    /// Employee share of the levy as a fraction of gross pay.
    pub rate: Decimal,
}

/// The complete set of statutory tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryRates {
    /// Jurisdiction these rates apply to.
    pub jurisdiction: String,
    /// Date from which these rates apply.
    pub effective_date: NaiveDate,
    /// PAYE bands and relief.
    pub paye: PayeConfig,
    /// NHIF fee table.
    pub nhif: NhifConfig,
    /// NSSF tiers.
    pub nssf: NssfConfig,
    /// Housing levy rate.
    pub housing_levy: HousingLevyConfig,
}
