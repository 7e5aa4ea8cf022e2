
pub mod tokenizer;
pub mod vectorizer;

use serde::Serialize;
use tracing::debug;

use crate::corpus::Corpus;
use crate::{FaqError, Result};
use tokenizer::tokenize;
use vectorizer::{SparseVector, VocabularyIndex};

/// Outcome of matching one query against the corpus. Transient; produced per
/// call and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The best corpus entry at or above the threshold
    Match {
        /// Index of the matched entry in corpus order
        index: usize,
        question: String,
        answer: String,
        /// Cosine similarity of the query against the matched question
        score: f32,
    },
    /// No corpus question scored at or above the threshold
    NoMatch { reason: NoMatchReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NoMatchReason {
    /// Best similarity fell below the caller's threshold
    OffTopic,
}

/// The similarity matcher: owns the corpus plus the vocabulary and question
/// vectors built from it.
///
/// Built exactly once per corpus; all fields are plain owned data, so a shared
/// reference can serve queries from any number of threads without locking.
#[derive(Debug, Clone)]
pub struct Matcher {
    corpus: Corpus,
    vocabulary: VocabularyIndex,
    question_vectors: Vec<SparseVector>,
}

impl Matcher {
    /// Build the vocabulary and per-question vectors for a corpus.
    ///
    /// Only question text enters the vocabulary; answers are never vectorized.
    /// Fails when the corpus has zero rows, since no meaningful vocabulary
    /// exists.
    #[inline]
    pub fn build(corpus: Corpus) -> Result<Self> {
        if corpus.is_empty() {
            return Err(FaqError::IndexBuild(
                "corpus has no entries; nothing to index".to_string(),
            ));
        }

        let documents: Vec<Vec<String>> = corpus.questions().map(tokenize).collect();
        let vocabulary = VocabularyIndex::build(&documents);
        let question_vectors = documents
            .iter()
            .map(|terms| vocabulary.vectorize(terms))
            .collect();

        debug!(
            "Indexed {} questions over a {}-term vocabulary",
            corpus.len(),
            vocabulary.len()
        );

        Ok(Self {
            corpus,
            vocabulary,
            question_vectors,
        })
    }

    #[inline]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Find the corpus question most similar to `query`.
    ///
    /// `threshold` must lie within `[0.0, 1.0]`; anything else is a caller
    /// contract violation and returns `InvalidThreshold` rather than being
    /// clamped. A best score exactly equal to the threshold counts as a
    /// match; only scores strictly below it are rejected. On equal maximum
    /// scores the lowest corpus index wins.
    #[inline]
    pub fn find_match(&self, query: &str, threshold: f32) -> Result<MatchOutcome> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(FaqError::InvalidThreshold(threshold));
        }

        let query_vector = self.vocabulary.vectorize(&tokenize(query));

        let mut best_index = 0;
        let mut best_score = f32::MIN;
        for (index, vector) in self.question_vectors.iter().enumerate() {
            let score = query_vector.dot(vector);
            // Strict comparison keeps the first occurrence on ties
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }

        if best_score < threshold {
            debug!(
                "Best score {best_score:.4} below threshold {threshold:.4}; no match"
            );
            return Ok(MatchOutcome::NoMatch {
                reason: NoMatchReason::OffTopic,
            });
        }

        let entry = self.corpus.get(best_index).ok_or_else(|| {
            FaqError::IndexBuild(format!(
                "question vectors out of sync with corpus at index {best_index}"
            ))
        })?;

        debug!("Matched corpus index {best_index} with score {best_score:.4}");

        Ok(MatchOutcome::Match {
            index: best_index,
            question: entry.question.clone(),
            answer: entry.answer.clone(),
            score: best_score,
        })
    }
}
