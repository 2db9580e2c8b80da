use axum::{http::StatusCode, Json};

use super::error_status;
use crate::domain::calculators::{
    co2_savings, cost_estimate, solar_savings, Appliance, Co2Savings, Consumption, CostEstimate,
    CostInput, SavingsInput, SolarSavings, APPLIANCES,
};

pub async fn co2(Json(consumption): Json<Consumption>) -> Result<Json<Co2Savings>, StatusCode> {
    co2_savings(consumption).map(Json).map_err(error_status)
}

pub async fn savings(Json(input): Json<SavingsInput>) -> Result<Json<SolarSavings>, StatusCode> {
    solar_savings(&input).map(Json).map_err(error_status)
}

pub async fn cost(Json(input): Json<CostInput>) -> Result<Json<CostEstimate>, StatusCode> {
    cost_estimate(&input).map(Json).map_err(error_status)
}

pub async fn appliances() -> Json<Vec<Appliance>> {
    Json(APPLIANCES.to_vec())
}
