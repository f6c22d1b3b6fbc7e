use regex::Regex;

use super::passage::Passage;
use super::Dimension;

/// Which part of a passage a rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Text,
    /// Only the first `n` whitespace tokens.
    LeadingWords(usize),
    /// The associated heading; never matches when there is none.
    Heading,
}

/// How matches turn into points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tally {
    /// Points once if the pattern matches anywhere.
    Once,
    /// Points for every match, limited to `cap`.
    PerMatch { cap: u32 },
}

/// One pattern-matching rule within a dimension.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: Regex,
    pub points: u32,
    pub target: Target,
    pub tally: Tally,
}

impl Rule {
    pub fn once(name: &'static str, pattern: &str, points: u32) -> Self {
        Rule {
            name,
            pattern: Regex::new(pattern).unwrap(),
            points,
            target: Target::Text,
            tally: Tally::Once,
        }
    }

    pub fn per_match(name: &'static str, pattern: &str, points: u32, cap: u32) -> Self {
        Rule {
            tally: Tally::PerMatch { cap },
            ..Rule::once(name, pattern, points)
        }
    }

    pub fn on(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn award(&self, passage: &Passage) -> u32 {
        let leading;
        let haystack = match self.target {
            Target::Text => passage.text(),
            Target::LeadingWords(n) => {
                leading = passage.leading_words(n);
                leading.as_str()
            }
            Target::Heading => match passage.heading() {
                Some(h) => h,
                None => return 0,
            },
        };

        match self.tally {
            Tally::Once if self.pattern.is_match(haystack) => self.points,
            Tally::Once => 0,
            Tally::PerMatch { cap } => {
                let hits = self.pattern.find_iter(haystack).count() as u32;
                hits.saturating_mul(self.points).min(cap)
            }
        }
    }
}

/// Common contract for the five citability dimensions.
///
/// A scorer contributes points from its rule table plus any measured signals
/// (ratios, length bands) that are not plain pattern matches.
pub trait DimensionScorer: Send + Sync {
    fn dimension(&self) -> Dimension;

    fn rules(&self) -> &[Rule] {
        &[]
    }

    fn measure(&self, _passage: &Passage) -> u32 {
        0
    }

    /// Unclamped sum of rule awards and measured points.
    fn raw_score(&self, passage: &Passage) -> u32 {
        let from_rules: u32 = self.rules().iter().map(|r| r.award(passage)).sum();
        from_rules + self.measure(passage)
    }

    /// Sub-score in `[0, cap]`. Passages without words always score 0.
    fn score(&self, passage: &Passage, cap: u32) -> u32 {
        if passage.is_empty() {
            return 0;
        }
        self.raw_score(passage).min(cap)
    }
}
