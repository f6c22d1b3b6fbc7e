//! Structural readability: sentence rhythm and visible structure.

use std::sync::LazyLock;

use super::passage::Passage;
use super::rules::{DimensionScorer, Rule};
use super::Dimension;

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::once(
            "transition",
            r"(?i)\b(?:(?:first|second|third)(?:ly)?|finally|additionally|moreover|furthermore)\b",
            4,
        ),
        Rule::once("numbered_item", r"(?i)\d+[.)]\s|\b(?:step|tip|point)\s+\d+", 4),
        Rule::once("paragraph_break", r"\n", 4),
    ]
});

pub struct StructuralReadability;

impl DimensionScorer for StructuralReadability {
    fn dimension(&self) -> Dimension {
        Dimension::StructuralReadability
    }

    fn rules(&self) -> &[Rule] {
        &RULES
    }

    fn measure(&self, passage: &Passage) -> u32 {
        let sentences = passage.sentences().len();
        if sentences == 0 {
            return 2;
        }
        let avg = passage.word_count() as f64 / sentences as f64;
        if (10.0..=20.0).contains(&avg) {
            8
        } else if (8.0..=25.0).contains(&avg) {
            5
        } else {
            2
        }
    }
}
