//! NSSF contribution calculation.
//!
//! Contributions are charged in two tiers: Tier I on pensionable pay up to
//! the Tier I limit, Tier II on the slice above it up to the Tier II width.

use rust_decimal::Decimal;

use crate::config::NssfConfig;

/// Calculates the employee NSSF contribution for a gross monthly salary.
///
/// Tier I is `tier_1.rate * min(gross, tier_1.limit)`; Tier II is
/// `tier_2.rate * clamp(gross - tier_1.limit, 0, tier_2.limit)`.
///
/// # Arguments
///
/// * `gross` - Gross monthly salary, already checked to be non-negative
/// * `config` - The NSSF tier configuration
///
/// # Examples
///
/// ```
/// use kenya_payroll::calculation::calculate_nssf;
/// use kenya_payroll::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let rates = ConfigLoader::kenya().unwrap().into_rates();
/// assert_eq!(calculate_nssf(Decimal::new(5000, 0), &rates.nssf), Decimal::new(300, 0));
/// assert_eq!(calculate_nssf(Decimal::new(90000, 0), &rates.nssf), Decimal::new(1800, 0));
/// ```
pub fn calculate_nssf(gross: Decimal, config: &NssfConfig) -> Decimal {
    let tier_1_pay = gross.min(config.tier_1.limit);
    let tier_2_pay = (gross - config.tier_1.limit)
        .max(Decimal::ZERO)
        .min(config.tier_2.limit);

    tier_1_pay * config.tier_1.rate + tier_2_pay * config.tier_2.rate
}
