
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{FaqError, Result};

/// Exact header labels required in the corpus file
pub const QUESTION_COLUMN: &str = "Q";
pub const ANSWER_COLUMN: &str = "A";

/// One authored question/answer pair from the corpus source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    /// The authored question text; empty string if the source cell was missing
    pub question: String,
    /// The authored answer text; empty string if the source cell was missing
    pub answer: String,
}

/// The fixed, ordered set of Q&A pairs serving as the matchable knowledge base.
///
/// Built once at startup and immutable thereafter. Source order is preserved
/// because it defines tie-break priority during matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<QaEntry>,
}

impl Corpus {
    /// Load a corpus from a CSV file with header columns `Q` and `A`
    #[inline]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            FaqError::Load(format!("cannot open corpus file {}: {e}", path.display()))
        })?;
        let corpus = Self::from_reader(BufReader::new(file))?;
        debug!(
            "Loaded {} corpus entries from {}",
            corpus.len(),
            path.display()
        );
        Ok(corpus)
    }

    /// Read a corpus from any CSV source with header columns `Q` and `A`.
    ///
    /// Extra columns are ignored. Missing cells in either column are coerced
    /// to the empty string so downstream code never sees an absent value.
    #[inline]
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| FaqError::Load(format!("cannot read corpus header row: {e}")))?;

        let question_idx = headers
            .iter()
            .position(|h| h == QUESTION_COLUMN)
            .ok_or_else(|| {
                FaqError::Load(format!("corpus is missing the '{QUESTION_COLUMN}' column"))
            })?;
        let answer_idx = headers
            .iter()
            .position(|h| h == ANSWER_COLUMN)
            .ok_or_else(|| {
                FaqError::Load(format!("corpus is missing the '{ANSWER_COLUMN}' column"))
            })?;

        let mut entries = Vec::new();
        for record in csv_reader.records() {
            let record =
                record.map_err(|e| FaqError::Load(format!("malformed corpus row: {e}")))?;
            entries.push(QaEntry {
                question: record.get(question_idx).unwrap_or_default().to_string(),
                answer: record.get(answer_idx).unwrap_or_default().to_string(),
            });
        }

        Ok(Self { entries })
    }

    /// Build a corpus directly from in-memory pairs. Primarily useful for
    /// callers that source their table from somewhere other than CSV.
    #[inline]
    pub fn from_entries(entries: Vec<QaEntry>) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&QaEntry> {
        self.entries.get(index)
    }

    #[inline]
    pub fn entries(&self) -> &[QaEntry] {
        &self.entries
    }

    /// All question texts in corpus order; the vocabulary is built from these
    /// alone, never from answers.
    #[inline]
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }
}
