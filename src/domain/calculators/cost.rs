use serde::{Deserialize, Serialize};

use super::co2::GRID_EMISSION_FACTOR;
use super::ensure_non_negative;
use crate::domain::DomainError;

pub const TARIFF: f64 = 6.5;
/// Residential capacity that earns the higher subsidy rate.
pub const SUBSIDY_TIER_KW: f64 = 3.0;
pub const DEFAULT_IRRADIANCE: f64 = 4.5;
pub const MAX_RECOMMENDED_KW: u32 = 10;

const MONTHLY_GENERATION_PER_KW: f64 = 120.0;

/// Peak sun hours per day for supported cities.
const LOCATION_IRRADIANCE: [(&str, f64); 8] = [
    ("delhi", 4.5),
    ("mumbai", 4.8),
    ("chennai", 5.2),
    ("bangalore", 5.0),
    ("hyderabad", 5.1),
    ("pune", 4.9),
    ("kolkata", 4.3),
    ("jaipur", 5.5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemType {
    #[default]
    Residential,
    Commercial,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pricing {
    pub cost_per_kw: f64,
    pub subsidy_rate: f64,
    pub subsidy_rate_higher: f64,
}

impl SystemType {
    pub fn pricing(self) -> Pricing {
        match self {
            Self::Residential => Pricing {
                cost_per_kw: 65_000.0,
                subsidy_rate: 0.4,
                subsidy_rate_higher: 0.2,
            },
            // Commercial benefit is accelerated depreciation at a flat rate.
            Self::Commercial => Pricing {
                cost_per_kw: 55_000.0,
                subsidy_rate: 0.3,
                subsidy_rate_higher: 0.3,
            },
        }
    }
}

pub fn location_irradiance(location: &str) -> f64 {
    let location = location.trim().to_lowercase();
    LOCATION_IRRADIANCE
        .iter()
        .find(|(city, _)| *city == location)
        .map(|(_, irradiance)| *irradiance)
        .unwrap_or(DEFAULT_IRRADIANCE)
}

/// Whole kW needed to offset `monthly_bill`, between 1 and 10.
pub fn recommended_system_size(monthly_bill: f64) -> u32 {
    let units = monthly_bill / TARIFF;
    let size = (units / MONTHLY_GENERATION_PER_KW).ceil();
    if size.is_nan() {
        return 1;
    }
    (size.max(1.0) as u32).min(MAX_RECOMMENDED_KW)
}

#[derive(Debug, Clone, Deserialize)]
pub struct CostInput {
    #[serde(default)]
    pub system_type: SystemType,
    pub system_size_kw: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub monthly_bill: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub system_type: SystemType,
    pub system_size_kw: f64,
    pub irradiance: f64,
    pub total_cost: f64,
    pub subsidy_amount: f64,
    pub net_cost: f64,
    pub monthly_bill: f64,
    pub monthly_generation_kwh: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub payback_years: f64,
    pub co2_savings_kg: f64,
    pub recommended_size_kw: u32,
}

pub fn cost_estimate(input: &CostInput) -> Result<CostEstimate, DomainError> {
    let size = ensure_non_negative("system_size_kw", input.system_size_kw)?;
    if size == 0.0 {
        return Err(DomainError::validation("system_size_kw must be greater than zero"));
    }
    let monthly_bill = ensure_non_negative("monthly_bill", input.monthly_bill)?;

    let pricing = input.system_type.pricing();
    let irradiance = location_irradiance(&input.location);

    let total_cost = size * pricing.cost_per_kw;
    let subsidy_amount = match input.system_type {
        SystemType::Residential if size > SUBSIDY_TIER_KW => {
            let tier_cost = SUBSIDY_TIER_KW * pricing.cost_per_kw;
            let remaining_cost = (size - SUBSIDY_TIER_KW) * pricing.cost_per_kw;
            tier_cost * pricing.subsidy_rate + remaining_cost * pricing.subsidy_rate_higher
        }
        _ => total_cost * pricing.subsidy_rate,
    };
    let net_cost = total_cost - subsidy_amount;

    let daily_generation = size * irradiance;
    let monthly_generation_kwh = daily_generation * 30.0;
    let annual_generation = daily_generation * 365.0;
    let annual_savings = annual_generation * TARIFF;

    Ok(CostEstimate {
        system_type: input.system_type,
        system_size_kw: size,
        irradiance,
        total_cost,
        subsidy_amount,
        net_cost,
        monthly_bill,
        monthly_generation_kwh,
        monthly_savings: monthly_generation_kwh * TARIFF,
        annual_savings,
        payback_years: net_cost / annual_savings,
        co2_savings_kg: annual_generation * GRID_EMISSION_FACTOR,
        recommended_size_kw: recommended_system_size(monthly_bill),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn input(system_type: SystemType, size: f64, location: &str) -> CostInput {
        CostInput {
            system_type,
            system_size_kw: size,
            location: location.into(),
            monthly_bill: 3_000.0,
        }
    }

    #[test]
    fn test_residential_small_system_full_subsidy_rate() {
        let estimate = cost_estimate(&input(SystemType::Residential, 3.0, "delhi")).unwrap();

        assert!(close(estimate.total_cost, 195_000.0));
        assert!(close(estimate.subsidy_amount, 78_000.0));
        assert!(close(estimate.net_cost, 117_000.0));
        assert!(close(estimate.monthly_generation_kwh, 405.0));
        assert!(close(estimate.annual_savings, 3.0 * 4.5 * 365.0 * 6.5));
    }

    #[test]
    fn test_residential_large_system_tiered_subsidy() {
        let estimate = cost_estimate(&input(SystemType::Residential, 5.0, "jaipur")).unwrap();

        // 3kW at 40% + 2kW at 20%
        assert!(close(estimate.subsidy_amount, 78_000.0 + 26_000.0));
        assert!(close(estimate.irradiance, 5.5));
    }

    #[test]
    fn test_commercial_flat_rate() {
        let estimate = cost_estimate(&input(SystemType::Commercial, 10.0, "Chennai")).unwrap();

        assert!(close(estimate.total_cost, 550_000.0));
        assert!(close(estimate.subsidy_amount, 165_000.0));
        assert!(close(estimate.irradiance, 5.2));
        assert!(close(estimate.co2_savings_kg, 10.0 * 5.2 * 365.0 * 0.82));
        assert!(estimate.payback_years > 0.0);
    }

    #[test]
    fn test_unknown_location_uses_default_irradiance() {
        assert!(close(location_irradiance("shimla"), DEFAULT_IRRADIANCE));
        assert!(close(location_irradiance(" Pune "), 4.9));
    }

    #[test]
    fn test_recommended_size_is_clamped() {
        assert_eq!(recommended_system_size(0.0), 1);
        // 3000 / 6.5 = 461.5 units -> 4 kW
        assert_eq!(recommended_system_size(3_000.0), 4);
        assert_eq!(recommended_system_size(1_000_000.0), MAX_RECOMMENDED_KW);
    }

    #[test]
    fn test_rejects_invalid_size() {
        assert!(cost_estimate(&input(SystemType::Residential, 0.0, "delhi")).is_err());
        assert!(cost_estimate(&input(SystemType::Commercial, -2.0, "delhi")).is_err());
    }
}
