
use itertools::Itertools;

/// Minimum word length kept by the tokenizer; single-character tokens carry
/// almost no lexical signal and are dropped.
const MIN_WORD_CHARS: usize = 2;

/// Tokenize text into the terms used for vocabulary and query vectors.
///
/// The rule is shared verbatim between index construction and query time:
/// lowercase the input, split it into alphanumeric runs, drop runs shorter
/// than two characters, then emit every word (unigram) followed by every
/// adjacent word pair joined by a single space (bigram).
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    let words = word_tokens(text);

    let bigrams: Vec<String> = words
        .iter()
        .tuple_windows()
        .map(|(a, b)| format!("{a} {b}"))
        .collect();

    let mut terms = words;
    terms.extend(bigrams);
    terms
}

/// Lowercased alphanumeric word tokens, in input order
fn word_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_WORD_CHARS)
        .map(str::to_string)
        .collect()
}
