pub mod catalog;
pub mod chat;
pub mod retriever;

pub use catalog::CatalogService;
pub use chat::ChatService;
pub use retriever::KeywordRetriever;
