use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::error_status;
use crate::api::state::AppState;
use crate::domain::{
    Dashboard, EnergyScheme, EnergyType, Myth, MythCategory, NewsCategory, NewsItem,
};

#[derive(Debug, Deserialize)]
pub struct SchemesQuery {
    #[serde(rename = "type")]
    pub energy_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MythsQuery {
    #[serde(default)]
    pub search: String,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    #[serde(default)]
    pub search: String,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MythCategoryResponse {
    pub id: &'static str,
    pub label: &'static str,
}

/// Blank and `all` mean no filter.
fn parse_filter<T>(raw: Option<&str>) -> Result<Option<T>, StatusCode>
where
    T: std::str::FromStr<Err = crate::domain::DomainError>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) if value.eq_ignore_ascii_case("all") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(error_status),
    }
}

pub async fn list_schemes(
    State(state): State<AppState>,
    Query(query): Query<SchemesQuery>,
) -> Result<Json<Vec<EnergyScheme>>, StatusCode> {
    let energy_type = parse_filter::<EnergyType>(query.energy_type.as_deref())?;
    Ok(Json(state.catalog.schemes(energy_type)))
}

pub async fn dashboard(State(state): State<AppState>) -> Json<Dashboard> {
    Json(state.catalog.dashboard())
}

pub async fn list_myths(
    State(state): State<AppState>,
    Query(query): Query<MythsQuery>,
) -> Result<Json<Vec<Myth>>, StatusCode> {
    let category = parse_filter::<MythCategory>(query.category.as_deref())?;
    Ok(Json(state.catalog.find_myths(&query.search, category)))
}

pub async fn myth_categories(State(state): State<AppState>) -> Json<Vec<MythCategoryResponse>> {
    Json(
        state
            .catalog
            .myth_categories()
            .into_iter()
            .map(|c| MythCategoryResponse {
                id: c.as_str(),
                label: c.label(),
            })
            .collect(),
    )
}

pub async fn list_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<Vec<NewsItem>>, StatusCode> {
    let category = parse_filter::<NewsCategory>(query.category.as_deref())?;
    Ok(Json(state.catalog.find_news(&query.search, category)))
}
