//! NHIF fee lookup.

use rust_decimal::Decimal;

use crate::config::NhifTable;

/// Looks up the NHIF flat fee for a gross monthly salary.
///
/// Returns the fee of the first band whose upper bound is at least `gross`.
/// A validated [`NhifTable`] ends in an unbounded band, so a band always
/// matches; the zero fallback is unreachable for tables built through
/// [`NhifTable::new`].
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::calculate_nhif;
/// use kenya_payroll::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let rates = ConfigLoader::kenya().unwrap().into_rates();
/// assert_eq!(calculate_nhif(Decimal::new(5999, 0), &rates.nhif.bands), Decimal::new(150, 0));
/// assert_eq!(calculate_nhif(Decimal::new(6000, 0), &rates.nhif.bands), Decimal::new(300, 0));
/// ```
pub fn calculate_nhif(gross: Decimal, table: &NhifTable) -> Decimal {
    table
        .iter()
        .find(|band| band.upper_bound.is_none_or(|bound| gross <= bound))
        .map_or(Decimal::ZERO, |band| band.fee)
}
