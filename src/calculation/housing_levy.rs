//! Affordable housing levy.

use rust_decimal::Decimal;

use crate::config::HousingLevyConfig;

/// Calculates the employee housing levy: `gross * rate`.
pub fn calculate_housing_levy(gross: Decimal, config: &HousingLevyConfig) -> Decimal {
    gross * config.rate
}
