//! Built-in content loaded at startup.

mod catalog;
mod knowledge_base;

pub use catalog::{default_energy_stats, default_myths, default_news, default_schemes};
pub use knowledge_base::default_documents;
