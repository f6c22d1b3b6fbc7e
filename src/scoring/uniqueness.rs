//! Uniqueness signals: first-hand research, worked examples, tool usage.

use std::sync::LazyLock;

use super::rules::{DimensionScorer, Rule};
use super::Dimension;

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::once(
            "original_research",
            r"(?i)our (?:research|study|data|analysis|survey|findings)|we (?:found|discovered|analyzed|surveyed|measured)",
            5,
        ),
        Rule::once(
            "example",
            r"(?i)case study|for example|for instance|in practice|real-world|hands-on",
            3,
        ),
        Rule::once("tool_usage", r"\b(?:using|with|via|through)\s+[A-Z][a-z]+", 2),
    ]
});

pub struct UniquenessSignals;

impl DimensionScorer for UniquenessSignals {
    fn dimension(&self) -> Dimension {
        Dimension::UniquenessSignals
    }

    fn rules(&self) -> &[Rule] {
        &RULES
    }
}
