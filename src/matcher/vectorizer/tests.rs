use super::*;
use crate::matcher::tokenizer::tokenize;

fn build_from(texts: &[&str]) -> (VocabularyIndex, Vec<Vec<String>>) {
    let documents: Vec<Vec<String>> = texts.iter().map(|t| tokenize(t)).collect();
    let vocab = VocabularyIndex::build(&documents);
    (vocab, documents)
}

#[test]
fn vocabulary_covers_all_corpus_terms() {
    let (vocab, _) = build_from(&["what is covid", "covid vaccine types"]);

    // 3 + 3 unigrams with "covid" shared, plus 2 + 2 bigrams
    assert_eq!(vocab.len(), 9);
    assert!(vocab.dimension_of("covid").is_some());
    assert!(vocab.dimension_of("what is").is_some());
    assert!(vocab.dimension_of("vaccine types").is_some());
}

#[test]
fn unseen_terms_have_no_dimension() {
    let (vocab, _) = build_from(&["what is covid"]);

    assert_eq!(vocab.dimension_of("weather"), None);
}

#[test]
fn shared_terms_get_lower_idf_than_rare_terms() {
    let (vocab, _) = build_from(&["what is covid", "covid vaccine types"]);

    let covid_dim = vocab.dimension_of("covid").expect("covid is in vocabulary");
    let vaccine_dim = vocab
        .dimension_of("vaccine")
        .expect("vaccine is in vocabulary");

    // "covid" appears in both documents, "vaccine" in one
    assert!(vocab.idf[covid_dim] < vocab.idf[vaccine_dim]);
}

#[test]
fn self_vector_has_unit_similarity() {
    let (vocab, documents) = build_from(&["what is covid", "covid vaccine types"]);

    for terms in &documents {
        let vector = vocab.vectorize(terms);
        assert!((vector.dot(&vector) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn out_of_vocabulary_terms_are_dropped() {
    let (vocab, _) = build_from(&["what is covid"]);

    let with_noise = vocab.vectorize(&tokenize("what is covid zzz unseen"));
    let without = vocab.vectorize(&tokenize("what is covid"));

    // Terms outside the vocabulary contribute no weight at all.
    // "covid zzz" is also out of vocabulary, so the only difference between
    // the two tokenizations is dropped terms.
    assert!((with_noise.dot(&without) - 1.0).abs() < 1e-6);
}

#[test]
fn empty_terms_vectorize_to_zero() {
    let (vocab, _) = build_from(&["what is covid"]);

    let vector = vocab.vectorize(&[]);
    assert!(vector.is_zero());
    assert_eq!(vector.dot(&vector), 0.0);
}

#[test]
fn disjoint_texts_have_zero_similarity() {
    let (vocab, _) = build_from(&["what is covid", "weather report today"]);

    let lhs = vocab.vectorize(&tokenize("what is covid"));
    let rhs = vocab.vectorize(&tokenize("weather report today"));

    assert_eq!(lhs.dot(&rhs), 0.0);
}

#[test]
fn dimension_assignment_is_deterministic() {
    let (first, _) = build_from(&["what is covid", "covid vaccine types"]);
    let (second, _) = build_from(&["what is covid", "covid vaccine types"]);

    assert_eq!(
        first.dimension_of("vaccine types"),
        second.dimension_of("vaccine types")
    );
    assert_eq!(first.len(), second.len());
}
