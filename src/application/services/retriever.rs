use std::sync::Arc;
use tracing::{debug, instrument};

use crate::domain::{
    similarity, Document, KnowledgeBaseStats, SearchResult, DEFAULT_CHUNK_SIZE,
};

/// Weight applied to title matches so a matching title can outrank body text.
pub const TITLE_WEIGHT: f64 = 1.2;
/// Documents scoring at or below this are treated as unrelated.
pub const MIN_RELEVANCE: f64 = 0.1;
/// Confidence never reports certainty.
pub const MAX_CONFIDENCE: f64 = 95.0;
pub const DEFAULT_TOP_K: usize = 3;

pub const NO_MATCH_CONTEXT: &str = "I don't have specific information about that topic in my knowledge base. However, I can provide general guidance on renewable energy topics.";
const CONTEXT_HEADER: &str = "Based on the renewable energy knowledge base:\n\n";

/// Keyword-overlap retriever over a small in-memory document set.
///
/// Every operation is a pure function of the query and the documents held,
/// so one instance can be shared across handlers behind an `Arc`.
pub struct KeywordRetriever {
    documents: Vec<Arc<Document>>,
    chunk_size: usize,
    default_top_k: usize,
}

impl KeywordRetriever {
    pub fn new(documents: impl IntoIterator<Item = Document>) -> Self {
        Self {
            documents: documents.into_iter().map(Arc::new).collect(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            default_top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_default_top_k(mut self, top_k: usize) -> Self {
        self.default_top_k = top_k;
        self
    }

    pub fn add_document(&mut self, document: Document) {
        self.documents.push(Arc::new(document));
    }

    pub fn documents(&self) -> &[Arc<Document>] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn default_top_k(&self) -> usize {
        self.default_top_k
    }

    #[instrument(skip(self), level = "debug")]
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchResult> {
        let mut results: Vec<SearchResult> = self
            .documents
            .iter()
            .filter_map(|document| {
                let (score, chunk) = self.score_document(query, document);
                (score > MIN_RELEVANCE).then(|| SearchResult {
                    document: Arc::clone(document),
                    score,
                    chunk,
                })
            })
            .collect();

        // sort_by is stable: equal scores keep document order
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(top_k);

        debug!(matches = results.len(), "knowledge base search");
        results
    }

    /// Final score and the best matching chunk for one document.
    fn score_document(&self, query: &str, document: &Document) -> (f64, String) {
        let title_score = similarity(query, &document.title) * TITLE_WEIGHT;

        let mut best: Option<(f64, String)> = None;
        for chunk in document.chunks(self.chunk_size) {
            let score = similarity(query, &chunk);
            if best.as_ref().map_or(true, |(best_score, _)| score > *best_score) {
                best = Some((score, chunk));
            }
        }
        let (chunk_score, chunk) = best.unwrap_or_default();

        (title_score.max(chunk_score).clamp(0.0, 1.0), chunk)
    }

    /// Prompt-ready summary of the best matches, numbered from 1.
    pub fn generate_context(&self, query: &str, top_k: usize) -> String {
        let results = self.search(query, top_k);
        if results.is_empty() {
            return NO_MATCH_CONTEXT.to_string();
        }

        let mut context = String::from(CONTEXT_HEADER);
        for (i, result) in results.iter().enumerate() {
            context.push_str(&format!(
                "{}. {} (Relevance: {:.1}%)\n{}\n\n",
                i + 1,
                result.document.title,
                result.score * 100.0,
                result.chunk
            ));
        }
        context
    }

    /// Percentage trust in the top match, 0 when nothing matched.
    pub fn confidence(&self, query: &str) -> f64 {
        self.search(query, 1)
            .first()
            .map_or(0.0, |top| (top.score * 100.0).min(MAX_CONFIDENCE))
    }

    pub fn stats(&self) -> KnowledgeBaseStats {
        let mut categories: Vec<String> = Vec::new();
        for document in &self.documents {
            if !categories.contains(&document.category) {
                categories.push(document.category.clone());
            }
        }

        KnowledgeBaseStats {
            document_count: self.documents.len(),
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed::default_documents;

    fn retriever() -> KeywordRetriever {
        KeywordRetriever::new(default_documents())
    }

    fn ids(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.document.id.as_str()).collect()
    }

    #[test]
    fn test_solar_subsidy_query_ranks_schemes_above_biogas() {
        let retriever = retriever();
        let results = retriever.search("solar subsidy for farmers", 10);
        let ranked = ids(&results);

        let position = |id: &str| ranked.iter().position(|r| *r == id);
        let kusum = position("pm-kusum-scheme").expect("pm-kusum ranked");
        let rooftop = position("rooftop-solar-subsidy").expect("rooftop ranked");
        let biogas = position("biogas-systems").expect("biogas ranked");

        assert!(kusum < biogas);
        assert!(rooftop < biogas);
    }

    #[test]
    fn test_unrelated_query_returns_nothing() {
        let retriever = retriever();

        assert!(retriever.search("xyzzy unrelated nonsense", 5).is_empty());
        assert_eq!(
            retriever.generate_context("xyzzy unrelated nonsense", 3),
            NO_MATCH_CONTEXT
        );
        assert_eq!(retriever.confidence("xyzzy unrelated nonsense"), 0.0);
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let retriever = retriever();
        assert!(retriever.search("", 5).is_empty());
        assert!(retriever.search("   \n\t", 5).is_empty());
    }

    #[test]
    fn test_search_is_deterministic_and_within_document_set() {
        let retriever = retriever();
        let queries = [
            "solar subsidy for farmers",
            "wind turbine payback",
            "biogas plant size for family of 6",
            "LED lighting energy efficiency",
        ];

        for query in queries {
            let first = retriever.search(query, retriever.len() + 5);
            let second = retriever.search(query, retriever.len() + 5);

            assert_eq!(ids(&first), ids(&second));
            for (a, b) in first.iter().zip(&second) {
                assert_eq!(a.score, b.score);
                assert_eq!(a.chunk, b.chunk);
            }

            for result in &first {
                assert!(retriever
                    .documents()
                    .iter()
                    .any(|d| Arc::ptr_eq(d, &result.document)));
                assert!(result.score > MIN_RELEVANCE && result.score <= 1.0);
            }

            assert!(first.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }

    #[test]
    fn test_top_k_truncates() {
        let retriever = retriever();
        let all = retriever.search("solar energy", 10);
        let top = retriever.search("solar energy", 2);

        assert!(all.len() > 2);
        assert_eq!(ids(&top), ids(&all)[..2].to_vec());
        assert!(retriever.search("solar energy", 0).is_empty());
    }

    #[test]
    fn test_ties_keep_document_order() {
        let retriever = KeywordRetriever::new([
            Document::new("a", "solar", "x", "nothing"),
            Document::new("b", "solar", "y", "nothing"),
        ]);

        assert_eq!(ids(&retriever.search("solar", 5)), vec!["a", "b"]);
    }

    #[test]
    fn test_best_chunk_comes_from_document() {
        let retriever = retriever().with_chunk_size(120);
        for result in retriever.search("biogas plant subsidy", 3) {
            let sentences: Vec<&str> = result.chunk.split(". ").collect();
            assert!(sentences
                .iter()
                .all(|s| result.document.content.contains(s)));
        }
    }

    #[test]
    fn test_generate_context_format() {
        let retriever = KeywordRetriever::new([Document::new(
            "pump",
            "Solar Pump Guide",
            "solar",
            "Solar pump sets run irrigation without diesel. They pay back quickly.",
        )]);

        let results = retriever.search("solar pump", 1);
        let context = retriever.generate_context("solar pump", 1);

        let expected = format!(
            "Based on the renewable energy knowledge base:\n\n1. Solar Pump Guide (Relevance: {:.1}%)\n{}\n\n",
            results[0].score * 100.0,
            results[0].chunk
        );
        assert_eq!(context, expected);
    }

    #[test]
    fn test_confidence_is_capped() {
        let retriever = KeywordRetriever::new([Document::new(
            "exact",
            "rooftop solar subsidy",
            "schemes",
            "rooftop solar subsidy",
        )]);

        assert_eq!(retriever.confidence("rooftop solar subsidy"), MAX_CONFIDENCE);
    }

    #[test]
    fn test_exact_title_score_is_clamped() {
        let retriever = KeywordRetriever::new([Document::new(
            "pump",
            "Solar Pump Guide",
            "solar",
            "Diesel sets cost more to run.",
        )]);

        let results = retriever.search("solar pump guide", 1);
        assert_eq!(results[0].score, 1.0);

        let context = retriever.generate_context("solar pump guide", 1);
        assert!(context.contains("1. Solar Pump Guide (Relevance: 100.0%)\n"));
        assert_eq!(retriever.confidence("solar pump guide"), MAX_CONFIDENCE);
    }

    #[test]
    fn test_confidence_matches_search() {
        let retriever = retriever();
        for query in ["solar panels", "xyzzy", "wind speed site", ""] {
            let confidence = retriever.confidence(query);
            assert!((0.0..=MAX_CONFIDENCE).contains(&confidence));
            assert_eq!(confidence == 0.0, retriever.search(query, 1).is_empty());
        }
    }

    #[test]
    fn test_default_stats() {
        let stats = retriever().stats();

        assert_eq!(stats.document_count, default_documents().len());
        assert_eq!(
            stats.categories,
            vec!["solar", "schemes", "wind", "biogas", "efficiency"]
        );
    }

    #[test]
    fn test_add_document_extends_stats_and_search() {
        let mut retriever = retriever();
        retriever.add_document(Document::new(
            "micro-hydro",
            "Micro Hydro Power",
            "hydro",
            "Micro hydro turbines serve remote villages near streams.",
        ));

        let stats = retriever.stats();
        assert_eq!(stats.document_count, 7);
        assert_eq!(stats.categories.last().map(String::as_str), Some("hydro"));
        assert_eq!(
            ids(&retriever.search("micro hydro turbines", 1)),
            vec!["micro-hydro"]
        );
    }
}
