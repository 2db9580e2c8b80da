use serde::{Deserialize, Serialize};

use super::ensure_non_negative;
use crate::domain::DomainError;

pub const COST_PER_KW: f64 = 50_000.0;
pub const SUBSIDY_RATE: f64 = 0.3;
pub const ELECTRICITY_TARIFF: f64 = 6.0;
pub const ANNUAL_TARIFF_INFLATION: f64 = 0.05;
pub const ANNUAL_DEGRADATION: f64 = 0.005;
/// Monthly generation of one kW of panels, kWh.
pub const GENERATION_PER_KW: f64 = 120.0;
/// Sizing headroom over current consumption.
pub const SIZING_FACTOR: f64 = 1.2;

const PROJECTION_YEARS: i32 = 10;
const SHORT_PROJECTION_YEARS: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Appliance {
    pub name: &'static str,
    pub power_watts: f64,
    pub hours_per_day: f64,
}

impl Appliance {
    pub fn monthly_kwh(&self) -> f64 {
        self.power_watts * self.hours_per_day * 30.0 / 1000.0
    }
}

pub const APPLIANCES: [Appliance; 5] = [
    Appliance {
        name: "Fan",
        power_watts: 75.0,
        hours_per_day: 12.0,
    },
    Appliance {
        name: "TV",
        power_watts: 150.0,
        hours_per_day: 5.0,
    },
    Appliance {
        name: "Refrigerator",
        power_watts: 200.0,
        hours_per_day: 24.0,
    },
    Appliance {
        name: "Water Pump",
        power_watts: 1000.0,
        hours_per_day: 2.0,
    },
    Appliance {
        name: "LED Lights (5)",
        power_watts: 50.0,
        hours_per_day: 6.0,
    },
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SavingsInput {
    pub monthly_units: Option<f64>,
    pub monthly_bill: Option<f64>,
    pub appliances: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaybackRating {
    Excellent,
    Good,
    Fair,
}

impl PaybackRating {
    pub fn from_years(years: f64) -> Self {
        if years <= 5.0 {
            Self::Excellent
        } else if years <= 7.0 {
            Self::Good
        } else {
            Self::Fair
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarSavings {
    pub monthly_units: f64,
    pub system_size_kw: u32,
    pub system_cost: f64,
    pub subsidy: f64,
    pub net_cost: f64,
    pub monthly_generation_kwh: f64,
    pub monthly_savings: f64,
    pub payback_years: f64,
    pub payback_rating: PaybackRating,
    pub five_year_savings: f64,
    pub ten_year_savings: f64,
}

/// Sizes a rooftop system for the household and projects its returns.
///
/// Explicit monthly units take precedence over the bill; selected appliances
/// add their monthly draw on top. Long-term savings compound tariff inflation
/// against panel degradation year by year.
pub fn solar_savings(input: &SavingsInput) -> Result<SolarSavings, DomainError> {
    let base_units = match (input.monthly_units, input.monthly_bill) {
        (Some(units), _) => ensure_non_negative("monthly_units", units)?,
        (None, Some(bill)) => ensure_non_negative("monthly_bill", bill)? / ELECTRICITY_TARIFF,
        (None, None) => 0.0,
    };

    let mut appliance_units = 0.0;
    for name in &input.appliances {
        let appliance = APPLIANCES
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| DomainError::validation(format!("Unknown appliance: {name}")))?;
        appliance_units += appliance.monthly_kwh();
    }

    let units = base_units + appliance_units;
    if units <= 0.0 {
        return Err(DomainError::validation(
            "provide monthly units, a monthly bill or at least one appliance",
        ));
    }

    let system_size_kw = (units * SIZING_FACTOR / GENERATION_PER_KW).ceil() as u32;
    let system_cost = f64::from(system_size_kw) * COST_PER_KW;
    let subsidy = system_cost * SUBSIDY_RATE;
    let net_cost = system_cost - subsidy;

    let monthly_generation_kwh = f64::from(system_size_kw) * GENERATION_PER_KW;
    let monthly_savings = units.min(monthly_generation_kwh) * ELECTRICITY_TARIFF;
    let payback_years = net_cost / (monthly_savings * 12.0);

    let mut five_year_savings = 0.0;
    let mut ten_year_savings = 0.0;
    for year in 1..=PROJECTION_YEARS {
        let tariff = ELECTRICITY_TARIFF * (1.0 + ANNUAL_TARIFF_INFLATION).powi(year);
        let efficiency = (1.0 - ANNUAL_DEGRADATION).powi(year);
        let annual_generation = monthly_generation_kwh * 12.0 * efficiency;
        let annual_savings = (units * 12.0).min(annual_generation) * tariff;

        if year <= SHORT_PROJECTION_YEARS {
            five_year_savings += annual_savings;
        }
        ten_year_savings += annual_savings;
    }

    Ok(SolarSavings {
        monthly_units: units,
        system_size_kw,
        system_cost,
        subsidy,
        net_cost,
        monthly_generation_kwh,
        monthly_savings,
        payback_years,
        payback_rating: PaybackRating::from_years(payback_years),
        five_year_savings,
        ten_year_savings,
    })
}
