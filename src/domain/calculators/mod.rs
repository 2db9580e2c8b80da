//! Closed-form estimators for renewable energy adoption.
//!
//! Every calculator is a pure function over its input record. Consumption
//! figures are monthly kWh and money is in rupees.

mod co2;
mod cost;
mod savings;

pub use co2::{co2_savings, Co2Savings, Consumption};
pub use cost::{
    cost_estimate, location_irradiance, recommended_system_size, CostEstimate, CostInput,
    Pricing, SystemType,
};
pub use savings::{solar_savings, Appliance, PaybackRating, SavingsInput, SolarSavings, APPLIANCES};

use crate::domain::DomainError;

fn ensure_non_negative(name: &str, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(format!(
            "{name} must be a non-negative number"
        )));
    }
    Ok(value)
}
