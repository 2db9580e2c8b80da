//! Application layer - Use cases and orchestration.
//!
//! Services here combine domain logic with the ports they need. The retriever
//! and catalog are pure and in-memory; the chat service reaches the hosted
//! model only through the `LlmService` port.

pub mod services;

pub use services::{CatalogService, ChatService, KeywordRetriever};
