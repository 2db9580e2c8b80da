use tracing::instrument;

use crate::domain::{
    Dashboard, EnergyScheme, EnergyStats, EnergyType, Myth, MythCategory, NewsCategory, NewsItem,
};

/// Read-only scheme dashboard, myth/fact reference and news feed.
pub struct CatalogService {
    schemes: Vec<EnergyScheme>,
    stats: EnergyStats,
    myths: Vec<Myth>,
    news: Vec<NewsItem>,
}

impl CatalogService {
    pub fn new(schemes: Vec<EnergyScheme>, stats: EnergyStats, myths: Vec<Myth>) -> Self {
        Self {
            schemes,
            stats,
            myths,
            news: Vec::new(),
        }
    }

    pub fn with_news(mut self, news: Vec<NewsItem>) -> Self {
        self.news = news;
        self
    }

    pub fn schemes(&self, energy_type: Option<EnergyType>) -> Vec<EnergyScheme> {
        self.schemes
            .iter()
            .filter(|s| energy_type.map_or(true, |t| s.energy_type == t))
            .cloned()
            .collect()
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            stats: self.stats.clone(),
            schemes: self.schemes.clone(),
        }
    }

    /// Myths whose text mentions `search` (case-insensitive) within `category`.
    ///
    /// A blank search matches every myth; `None` matches every category.
    #[instrument(skip(self), level = "debug")]
    pub fn find_myths(&self, search: &str, category: Option<MythCategory>) -> Vec<Myth> {
        let term = search.trim().to_lowercase();
        self.myths
            .iter()
            .filter(|m| category.map_or(true, |c| m.category == c))
            .filter(|m| term.is_empty() || m.mentions(&term))
            .cloned()
            .collect()
    }

    pub fn myth_categories(&self) -> Vec<MythCategory> {
        MythCategory::ALL.to_vec()
    }

    /// News items whose title, summary or content mention `search`, in feed order.
    #[instrument(skip(self), level = "debug")]
    pub fn find_news(&self, search: &str, category: Option<NewsCategory>) -> Vec<NewsItem> {
        let term = search.trim().to_lowercase();
        self.news
            .iter()
            .filter(|n| category.map_or(true, |c| n.category == c))
            .filter(|n| term.is_empty() || n.mentions(&term))
            .cloned()
            .collect()
    }
}
