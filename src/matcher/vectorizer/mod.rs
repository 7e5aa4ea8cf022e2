#[cfg(test)]
mod tests;

use std::collections::HashMap;

use tracing::debug;

/// Fixed mapping from term to vector dimension plus an inverse-document-frequency
/// weight, derived solely from the corpus questions at build time.
///
/// Immutable after construction; query-time terms outside the vocabulary are
/// dropped without error.
#[derive(Debug, Clone)]
pub struct VocabularyIndex {
    dims: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl VocabularyIndex {
    /// Build a vocabulary over the given documents, each already tokenized.
    ///
    /// Dimensions are assigned in first-seen order, which is deterministic for
    /// a fixed corpus. IDF uses the smoothed form
    /// `ln((1 + n_docs) / (1 + doc_freq)) + 1`, so terms present in every
    /// document still carry a small positive weight.
    #[inline]
    pub fn build(documents: &[Vec<String>]) -> Self {
        let mut dims: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for terms in documents {
            let mut seen_dims = Vec::new();
            for term in terms {
                let next_dim = dims.len();
                let dim = *dims.entry(term.clone()).or_insert(next_dim);
                if dim == doc_freq.len() {
                    doc_freq.push(0);
                }
                if !seen_dims.contains(&dim) {
                    seen_dims.push(dim);
                    doc_freq[dim] += 1;
                }
            }
        }

        let n_docs = documents.len() as f32;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        debug!(
            "Built vocabulary with {} terms over {} documents",
            dims.len(),
            documents.len()
        );

        Self { dims, idf }
    }

    /// Number of distinct terms (vector dimensions)
    #[inline]
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    #[inline]
    pub fn dimension_of(&self, term: &str) -> Option<usize> {
        self.dims.get(term).copied()
    }

    /// Project tokenized text into an L2-normalized TF-IDF vector.
    ///
    /// Terms absent from the vocabulary contribute nothing. Because every
    /// vector is normalized here, cosine similarity between two of them is a
    /// plain dot product, and a text vectorized against a vocabulary built
    /// from itself scores exactly 1.0 against its own vector.
    #[inline]
    pub fn vectorize(&self, terms: &[String]) -> SparseVector {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for term in terms {
            if let Some(dim) = self.dimension_of(term) {
                *counts.entry(dim).or_insert(0.0) += 1.0;
            }
        }

        let mut weights: Vec<(usize, f32)> = counts
            .into_iter()
            .map(|(dim, tf)| (dim, tf * self.idf[dim]))
            .collect();
        weights.sort_unstable_by_key(|&(dim, _)| dim);

        SparseVector::normalized(weights)
    }
}

/// A sparse vector of (dimension, weight) pairs, sorted by dimension and
/// L2-normalized at construction
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    weights: Vec<(usize, f32)>,
}

impl SparseVector {
    /// L2-normalize the given sorted weights; an all-zero input stays the
    /// zero vector rather than dividing by zero
    fn normalized(weights: Vec<(usize, f32)>) -> Self {
        let norm = weights
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f32>()
            .sqrt();
        if norm == 0.0 {
            return Self { weights };
        }
        Self {
            weights: weights.into_iter().map(|(dim, w)| (dim, w / norm)).collect(),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }

    /// Dot product of two sorted sparse vectors. Since both sides are
    /// L2-normalized this is their cosine similarity.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        let mut sum = 0.0;
        let mut lhs = self.weights.iter().peekable();
        let mut rhs = other.weights.iter().peekable();

        while let (Some(&&(ld, lw)), Some(&&(rd, rw))) = (lhs.peek(), rhs.peek()) {
            match ld.cmp(&rd) {
                std::cmp::Ordering::Less => {
                    lhs.next();
                }
                std::cmp::Ordering::Greater => {
                    rhs.next();
                }
                std::cmp::Ordering::Equal => {
                    sum += lw * rw;
                    lhs.next();
                    rhs.next();
                }
            }
        }

        sum
    }
}
