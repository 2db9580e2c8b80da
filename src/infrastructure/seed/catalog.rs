use chrono::NaiveDate;

use crate::domain::{
    EnergyScheme, EnergyStats, EnergyType, Myth, MythCategory, NewsCategory, NewsItem,
    SchemeStatus,
};

fn scheme(
    id: &str,
    name: &str,
    description: &str,
    subsidy: &str,
    eligibility: &str,
    energy_type: EnergyType,
    status: SchemeStatus,
) -> EnergyScheme {
    EnergyScheme {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        subsidy: subsidy.to_string(),
        eligibility: eligibility.to_string(),
        energy_type,
        status,
    }
}

pub fn default_schemes() -> Vec<EnergyScheme> {
    vec![
        scheme(
            "1",
            "PM-KUSUM (Solar Pumps)",
            "Solar pumps for irrigation and drinking water",
            "Up to 60%",
            "Farmers with land ownership",
            EnergyType::Solar,
            SchemeStatus::Active,
        ),
        scheme(
            "2",
            "Rooftop Solar Scheme",
            "Solar panels for residential and commercial use",
            "20-40%",
            "All building owners",
            EnergyType::Solar,
            SchemeStatus::Active,
        ),
        scheme(
            "3",
            "Small Wind Energy",
            "Wind turbines for rural electrification",
            "Up to 30%",
            "Communities with wind resources",
            EnergyType::Wind,
            SchemeStatus::New,
        ),
        scheme(
            "4",
            "Biogas Plant Scheme",
            "Family-type biogas plants for cooking and lighting",
            "Rs. 10,000-15,000",
            "Rural households with cattle",
            EnergyType::Bio,
            SchemeStatus::Active,
        ),
        scheme(
            "5",
            "Micro Hydro Power",
            "Small-scale hydro power for remote villages",
            "Up to 50%",
            "Villages near water sources",
            EnergyType::Hydro,
            SchemeStatus::Limited,
        ),
    ]
}

pub fn default_energy_stats() -> EnergyStats {
    EnergyStats {
        total_capacity: "175 GW".to_string(),
        rural_connections: "28.5 Crore".to_string(),
        subsidy_distributed: "₹12,450 Cr".to_string(),
        active_schemes: 25,
    }
}

fn myth(id: &str, category: MythCategory, myth: &str, reality: &str, explanation: &str) -> Myth {
    Myth {
        id: id.to_string(),
        category,
        myth: myth.to_string(),
        reality: reality.to_string(),
        explanation: explanation.to_string(),
    }
}

pub fn default_myths() -> Vec<Myth> {
    vec![
        myth(
            "1",
            MythCategory::Solar,
            "Solar panels don't work on cloudy days",
            "They still produce 10–25% power under clouds",
            "Solar panels work with diffused sunlight too. Germany generates lots of solar power despite cloudy weather.",
        ),
        myth(
            "2",
            MythCategory::Cost,
            "Solar is too expensive for villagers",
            "Subsidies and loans reduce cost by 40–60%",
            "Government provides 30% subsidy + easy EMI options. Many villagers pay less than their electricity bills.",
        ),
        myth(
            "3",
            MythCategory::Biogas,
            "Biogas smells bad and is unsafe",
            "Modern plants are odorless and completely safe",
            "Properly built biogas plants have no smell. They are safer than LPG cylinders and produce clean cooking gas.",
        ),
        myth(
            "4",
            MythCategory::Solar,
            "Solar panels need constant cleaning",
            "Rain cleans them naturally, minimal maintenance needed",
            "Monsoon rains keep panels clean. Only need cleaning 2-3 times per year with water and soft cloth.",
        ),
        myth(
            "5",
            MythCategory::Wind,
            "Wind turbines are very noisy",
            "Modern turbines are quieter than traffic noise",
            "New wind turbines produce less than 40 decibels of sound, quieter than normal conversation.",
        ),
        myth(
            "6",
            MythCategory::General,
            "Renewable energy is unreliable",
            "Works 24/7 with proper battery backup",
            "Solar + battery systems provide power day and night. Wind works even when solar doesn't.",
        ),
        myth(
            "7",
            MythCategory::Cost,
            "Maintenance costs are very high",
            "Minimal maintenance, saves money long-term",
            "Solar panels last 25+ years with minimal maintenance. Saves more money than conventional electricity.",
        ),
        myth(
            "8",
            MythCategory::Solar,
            "Solar doesn't work in monsoon",
            "Still produces 40-60% power during monsoon",
            "Even during heavy monsoon, solar panels produce significant power. India's solar plants work year-round.",
        ),
        myth(
            "9",
            MythCategory::Biogas,
            "Biogas requires too much cow dung",
            "Just 2-3 cows can run a family biogas plant",
            "A small family needs only 10-15 kg cow dung daily for cooking gas. Most rural families have enough.",
        ),
        myth(
            "10",
            MythCategory::General,
            "Technology is too complex for villages",
            "Simple to use, works like normal electricity",
            "Renewable energy systems work automatically. Just switch on/off like regular electricity connection.",
        ),
    ]
}

struct NewsSeed {
    id: &'static str,
    title: &'static str,
    summary: &'static str,
    content: &'static str,
    category: NewsCategory,
    published_on: (i32, u32, u32),
    source: &'static str,
    read_time_minutes: u32,
}

impl From<NewsSeed> for NewsItem {
    fn from(seed: NewsSeed) -> Self {
        let (year, month, day) = seed.published_on;
        Self {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            summary: seed.summary.to_string(),
            content: seed.content.to_string(),
            category: seed.category,
            published_on: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
            source: seed.source.to_string(),
            read_time_minutes: seed.read_time_minutes,
        }
    }
}

/// Newest first.
pub fn default_news() -> Vec<NewsItem> {
    [
        NewsSeed {
            id: "1",
            title: "PM-KUSUM Scheme Reaches 1 Million Farmers",
            summary: "The PM-KUSUM scheme has successfully provided solar-powered irrigation to over 1 million farmers across India, reducing electricity costs by 60%.",
            content: "The Pradhan Mantri Kisan Urja Suraksha evam Utthaan Mahabhiyan (PM-KUSUM) has achieved a significant milestone by reaching over 1 million farmers across rural India. This scheme provides financial assistance for installing solar pumps, grid-connected solar plants, and solarization of existing grid-connected pumps.",
            category: NewsCategory::Solar,
            published_on: (2024, 3, 15),
            source: "MNRE India",
            read_time_minutes: 3,
        },
        NewsSeed {
            id: "2",
            title: "New Subsidy Rates for Rooftop Solar Announced",
            summary: "Central government increases subsidy rates for residential rooftop solar installations up to 40% for systems under 3kW.",
            content: "The Ministry of New and Renewable Energy (MNRE) has announced enhanced subsidy rates for rooftop solar installations. Residential consumers can now get up to 40% subsidy for systems up to 3kW and 20% for systems between 3kW to 10kW capacity.",
            category: NewsCategory::Subsidy,
            published_on: (2024, 3, 12),
            source: "Economic Times",
            read_time_minutes: 2,
        },
        NewsSeed {
            id: "3",
            title: "Wind Energy Capacity Crosses 75 GW Milestone",
            summary: "India achieves another renewable energy milestone with wind power capacity exceeding 75 GW, contributing significantly to clean energy goals.",
            content: "India has crossed the 75 GW wind energy capacity milestone, reinforcing its position as the fourth-largest wind power producer globally. This achievement brings the country closer to its renewable energy target of 500 GW by 2030.",
            category: NewsCategory::Wind,
            published_on: (2024, 3, 10),
            source: "Renewable Energy World",
            read_time_minutes: 4,
        },
        NewsSeed {
            id: "4",
            title: "Rural Electrification Through Mini-Grids Expands",
            summary: "Government launches new initiative to electrify remote villages through solar mini-grid systems, targeting 10,000 villages.",
            content: "The rural electrification program has been expanded with a focus on solar mini-grid systems for remote villages. This initiative aims to provide reliable electricity to 10,000 villages that are not connected to the main power grid.",
            category: NewsCategory::Policy,
            published_on: (2024, 3, 8),
            source: "Power Ministry",
            read_time_minutes: 5,
        },
        NewsSeed {
            id: "5",
            title: "Breakthrough in Perovskite Solar Cell Efficiency",
            summary: "Indian researchers achieve 28% efficiency in perovskite solar cells, opening new possibilities for affordable solar technology.",
            content: "Researchers at IIT Delhi have achieved a breakthrough efficiency of 28% in perovskite solar cells, which could significantly reduce the cost of solar power generation and make it more accessible for rural applications.",
            category: NewsCategory::Technology,
            published_on: (2024, 3, 5),
            source: "Science Daily",
            read_time_minutes: 6,
        },
    ]
    .into_iter()
    .map(NewsItem::from)
    .collect()
}
