//! Self-containment: can the passage be lifted out of the page and still make sense?

use std::sync::LazyLock;

use regex::Regex;

use super::passage::Passage;
use super::rules::DimensionScorer;
use super::Dimension;

static PRONOUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:it|they|them|their|this|that|these|those|he|she|his|her)\b").unwrap()
});
static PROPER_NOUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").unwrap());

pub struct SelfContainment;

impl DimensionScorer for SelfContainment {
    fn dimension(&self) -> Dimension {
        Dimension::SelfContainment
    }

    fn measure(&self, passage: &Passage) -> u32 {
        length_band(passage.word_count())
            + pronoun_density(passage)
            + named_entities(passage.text())
    }
}

fn length_band(words: usize) -> u32 {
    match words {
        134..=167 => 10,
        100..=200 => 7,
        80..=250 => 4,
        n if n < 30 || n > 400 => 0,
        _ => 2,
    }
}

/// Fewer pronouns per word means less reliance on surrounding context.
fn pronoun_density(passage: &Passage) -> u32 {
    if passage.is_empty() {
        return 0;
    }
    let pronouns = PRONOUN_RE.find_iter(passage.text()).count();
    let ratio = pronouns as f64 / passage.word_count() as f64;
    if ratio < 0.02 {
        8
    } else if ratio < 0.04 {
        5
    } else if ratio < 0.06 {
        3
    } else {
        0
    }
}

fn named_entities(text: &str) -> u32 {
    match PROPER_NOUN_RE.find_iter(text).count() {
        0 => 0,
        1 | 2 => 4,
        _ => 7,
    }
}
