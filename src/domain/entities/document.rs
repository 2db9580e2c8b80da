use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::Split;
use std::sync::Arc;

/// Target length ceiling, in characters, for content chunks.
pub const DEFAULT_CHUNK_SIZE: usize = 300;

const SENTENCE_SEPARATOR: &str = ". ";
const SENTENCE_SEPARATOR_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            content: content.into(),
            metadata: DocumentMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn chunks(&self, max_len: usize) -> SentenceChunks<'_> {
        chunk_text(&self.content, max_len)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub read_time_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiaries: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_potential: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<String>,
}

impl DocumentMetadata {
    pub fn read_time(minutes: u32) -> Self {
        Self {
            read_time_minutes: minutes,
            ..Self::default()
        }
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn with_last_updated(mut self, year: i32, month: u32, day: u32) -> Self {
        self.last_updated = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub fn with_beneficiaries(mut self, beneficiaries: u64) -> Self {
        self.beneficiaries = Some(beneficiaries);
        self
    }

    pub fn with_savings_potential(mut self, potential: impl Into<String>) -> Self {
        self.savings_potential = Some(potential.into());
        self
    }

    pub fn with_applications<I, S>(mut self, applications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.applications = applications.into_iter().map(Into::into).collect();
        self
    }
}

/// A ranked match produced by a single knowledge base search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub document: Arc<Document>,
    pub score: f64,
    pub chunk: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBaseStats {
    pub document_count: usize,
    pub categories: Vec<String>,
}

/// Splits `text` into sentence-aligned chunks of at most `max_len` characters.
///
/// Sentences end at `.`, `!` or `?`; each is trimmed and empty ones are dropped.
/// Adjacent sentences are joined with `". "` until the next one would push the
/// chunk past `max_len`. A sentence that is longer than `max_len` on its own is
/// emitted whole. The returned iterator is lazy and can be cloned to restart.
pub fn chunk_text(text: &str, max_len: usize) -> SentenceChunks<'_> {
    SentenceChunks {
        sentences: text.split(is_sentence_end as fn(char) -> bool),
        pending: None,
        max_len,
    }
}

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

#[derive(Clone)]
pub struct SentenceChunks<'a> {
    sentences: Split<'a, fn(char) -> bool>,
    pending: Option<&'a str>,
    max_len: usize,
}

impl<'a> SentenceChunks<'a> {
    fn next_sentence(&mut self) -> Option<&'a str> {
        if let Some(sentence) = self.pending.take() {
            return Some(sentence);
        }
        self.sentences
            .by_ref()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}

impl Iterator for SentenceChunks<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let first = self.next_sentence()?;
        let mut chunk = first.to_string();
        let mut chunk_len = first.chars().count();

        while let Some(sentence) = self.next_sentence() {
            let sentence_len = sentence.chars().count();
            if chunk_len + SENTENCE_SEPARATOR_LEN + sentence_len > self.max_len {
                self.pending = Some(sentence);
                break;
            }
            chunk.push_str(SENTENCE_SEPARATOR);
            chunk.push_str(sentence);
            chunk_len += SENTENCE_SEPARATOR_LEN + sentence_len;
        }

        Some(chunk)
    }
}
