use serde::{Deserialize, Serialize};

use super::ensure_non_negative;
use crate::domain::DomainError;

/// India grid emission factor, kg CO2 per kWh.
pub const GRID_EMISSION_FACTOR: f64 = 0.82;
/// Lifecycle emissions of solar and wind, kg CO2 per kWh.
pub const RENEWABLE_EMISSION_FACTOR: f64 = 0.05;
/// CO2 absorbed by one tree in a year, kg.
pub const TREE_CO2_ABSORPTION: f64 = 22.0;
pub const AVERAGE_TARIFF: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Consumption {
    MonthlyBill(f64),
    MonthlyUnits(f64),
}

impl Consumption {
    pub fn monthly_units(&self) -> f64 {
        match *self {
            Self::MonthlyBill(bill) => bill / AVERAGE_TARIFF,
            Self::MonthlyUnits(units) => units,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Co2Savings {
    pub monthly_units: f64,
    pub monthly_emissions_kg: f64,
    pub renewable_emissions_kg: f64,
    pub monthly_saved_kg: f64,
    pub annual_saved_kg: f64,
    pub trees_equivalent: u32,
    pub reduction_percent: f64,
}

pub fn co2_savings(consumption: Consumption) -> Result<Co2Savings, DomainError> {
    let units = ensure_non_negative("consumption", consumption.monthly_units())?;
    if units == 0.0 {
        return Err(DomainError::validation("consumption must be greater than zero"));
    }

    let monthly_emissions_kg = units * GRID_EMISSION_FACTOR;
    let renewable_emissions_kg = units * RENEWABLE_EMISSION_FACTOR;
    let monthly_saved_kg = monthly_emissions_kg - renewable_emissions_kg;
    let annual_saved_kg = monthly_saved_kg * 12.0;

    Ok(Co2Savings {
        monthly_units: units,
        monthly_emissions_kg,
        renewable_emissions_kg,
        monthly_saved_kg,
        annual_saved_kg,
        trees_equivalent: (annual_saved_kg / TREE_CO2_ABSORPTION).round() as u32,
        reduction_percent: monthly_saved_kg / monthly_emissions_kg * 100.0,
    })
}
