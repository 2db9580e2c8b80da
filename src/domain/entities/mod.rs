mod catalog;
mod conversation;
mod document;
mod relevance;

pub use catalog::{
    Dashboard, EnergyScheme, EnergyStats, EnergyType, Myth, MythCategory, NewsCategory,
    NewsItem, SchemeStatus,
};
pub use conversation::{ChatReply, Message, MessageRole};
pub use document::{
    chunk_text, Document, DocumentMetadata, KnowledgeBaseStats, SearchResult, SentenceChunks,
    DEFAULT_CHUNK_SIZE,
};
pub use relevance::{similarity, KEYWORD_BONUS, RENEWABLE_KEYWORDS};
