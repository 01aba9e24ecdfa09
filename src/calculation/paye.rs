//! PAYE (income tax) calculation.
//!
//! PAYE is a progressive marginal tax over cumulative bands, less a fixed
//! monthly personal relief, floored at zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{PayBands, PayeConfig};

/// The portion of taxable income that fell into one band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandSlice {
    /// Lower bound of the band.
    pub lower_bound: Decimal,
    /// Upper bound of the band, `None` for the final band.
    pub upper_bound: Option<Decimal>,
    /// Income taxed in this band.
    pub taxable: Decimal,
    /// Marginal rate of the band.
    pub rate: Decimal,
    /// Tax charged in this band.
    pub tax: Decimal,
}

/// A PAYE computation broken down by band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeBreakdown {
    /// One slice per band the income reached, in band order.
    pub slices: Vec<BandSlice>,
    /// Sum of the slice taxes, before relief.
    pub gross_tax: Decimal,
    /// Relief actually used (never more than the gross tax).
    pub relief_applied: Decimal,
    /// Tax payable after relief.
    pub paye: Decimal,
}

/// Splits `income` across the bands.
///
/// Bands are cumulative, so each band's width is `bound - previous_bound`.
/// Walking stops once the income is exhausted.
pub fn band_slices(income: Decimal, bands: &PayBands) -> Vec<BandSlice> {
    let mut slices = Vec::new();
    let mut lower = Decimal::ZERO;

    for band in bands.iter() {
        if income <= lower {
            break;
        }

        let upper = band.upper_bound.map_or(income, |bound| income.min(bound));
        let taxable = upper - lower;
        slices.push(BandSlice {
            lower_bound: lower,
            upper_bound: band.upper_bound,
            taxable,
            rate: band.rate,
            tax: taxable * band.rate,
        });

        match band.upper_bound {
            Some(bound) => lower = bound,
            None => break,
        }
    }

    slices
}

/// Calculates PAYE with a per-band breakdown.
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::calculate_paye_breakdown;
/// use kenya_payroll::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let rates = ConfigLoader::kenya().unwrap().into_rates();
/// let breakdown = calculate_paye_breakdown(Decimal::new(30000, 0), &rates.paye);
/// assert_eq!(breakdown.slices.len(), 2);
/// assert_eq!(breakdown.gross_tax, Decimal::new(3900, 0));
/// assert_eq!(breakdown.paye, Decimal::new(1500, 0));
/// ```
pub fn calculate_paye_breakdown(taxable_income: Decimal, config: &PayeConfig) -> PayeBreakdown {
    let slices = band_slices(taxable_income, &config.bands);
    let gross_tax: Decimal = slices.iter().map(|s| s.tax).sum();
    let relief_applied = gross_tax.min(config.personal_relief);

    PayeBreakdown {
        slices,
        gross_tax,
        relief_applied,
        paye: gross_tax - relief_applied,
    }
}

/// Calculates PAYE on taxable income: `max(0, banded tax - personal relief)`.
///
/// # Arguments
///
/// * `taxable_income` - Gross pay less NSSF and housing levy, non-negative
/// * `config` - Bands and personal relief
pub fn calculate_paye(taxable_income: Decimal, config: &PayeConfig) -> Decimal {
    calculate_paye_breakdown(taxable_income, config).paye
}
