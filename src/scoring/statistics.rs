//! Statistical density: concrete figures, dates and named sources.

use std::sync::LazyLock;

use super::rules::{DimensionScorer, Rule};
use super::Dimension;

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::per_match("percentage", r"\d+(?:\.\d+)?%", 3, 6),
        Rule::per_match(
            "dollar_amount",
            r"\$[\d,]+(?:\.\d+)?(?:\s*(?:million|billion|M|B|K))?",
            3,
            5,
        ),
        Rule::per_match(
            "counted_unit",
            r"(?i)\b\d+(?:,\d{3})*(?:\.\d+)?\s+(?:users|customers|pages|sites|companies|businesses|people|percent|times|x\b)",
            2,
            4,
        ),
        Rule::once("recent_year", r"\b20(?:1\d|2[0-6])\b", 2),
        // Each source family counts once; a passage hitting all three earns 6.
        Rule::once("source_attribution", r"\b(?:according to|per|from|by)\s+[A-Z]", 2),
        Rule::once(
            "source_organization",
            r"Gartner|Forrester|McKinsey|Harvard|Stanford|MIT|Google|Microsoft|OpenAI|Anthropic",
            2,
        ),
        Rule::once("source_citation", r"\([A-Z][a-z]+(?:\s+\d{4})?\)", 2),
    ]
});

pub struct StatisticalDensity;

impl DimensionScorer for StatisticalDensity {
    fn dimension(&self) -> Dimension {
        Dimension::StatisticalDensity
    }

    fn rules(&self) -> &[Rule] {
        &RULES
    }
}
