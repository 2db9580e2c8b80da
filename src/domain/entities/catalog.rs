use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyScheme {
    pub id: String,
    pub name: String,
    pub description: String,
    pub subsidy: String,
    pub eligibility: String,
    pub energy_type: EnergyType,
    pub status: SchemeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyType {
    Solar,
    Wind,
    Hydro,
    Bio,
}

impl FromStr for EnergyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solar" => Ok(Self::Solar),
            "wind" => Ok(Self::Wind),
            "hydro" => Ok(Self::Hydro),
            "bio" | "biogas" => Ok(Self::Bio),
            other => Err(DomainError::validation(format!("Unknown energy type: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeStatus {
    Active,
    New,
    Limited,
}

/// Headline figures shown above the scheme list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyStats {
    pub total_capacity: String,
    pub rural_connections: String,
    pub subsidy_distributed: String,
    pub active_schemes: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub stats: EnergyStats,
    pub schemes: Vec<EnergyScheme>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Myth {
    pub id: String,
    pub category: MythCategory,
    pub myth: String,
    pub reality: String,
    pub explanation: String,
}

impl Myth {
    /// `term` must already be lower-cased.
    pub fn mentions(&self, term: &str) -> bool {
        [&self.myth, &self.reality, &self.explanation]
            .iter()
            .any(|text| text.to_lowercase().contains(term))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MythCategory {
    Solar,
    Cost,
    Biogas,
    Wind,
    General,
}

impl MythCategory {
    pub const ALL: [MythCategory; 5] = [
        Self::Solar,
        Self::Cost,
        Self::Biogas,
        Self::Wind,
        Self::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Cost => "cost",
            Self::Biogas => "biogas",
            Self::Wind => "wind",
            Self::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Solar => "Solar Energy",
            Self::Cost => "Cost & Money",
            Self::Biogas => "Biogas",
            Self::Wind => "Wind Energy",
            Self::General => "General",
        }
    }
}

impl fmt::Display for MythCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MythCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("Unknown myth category: {s}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub category: NewsCategory,
    pub published_on: NaiveDate,
    pub source: String,
    pub read_time_minutes: u32,
}

impl NewsItem {
    /// `term` must already be lower-cased.
    pub fn mentions(&self, term: &str) -> bool {
        [&self.title, &self.summary, &self.content]
            .iter()
            .any(|text| text.to_lowercase().contains(term))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Solar,
    Wind,
    Policy,
    Technology,
    Subsidy,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 5] = [
        Self::Solar,
        Self::Wind,
        Self::Policy,
        Self::Technology,
        Self::Subsidy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Wind => "wind",
            Self::Policy => "policy",
            Self::Technology => "technology",
            Self::Subsidy => "subsidy",
        }
    }
}

impl FromStr for NewsCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("Unknown news category: {s}")))
    }
}
