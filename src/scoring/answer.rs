//! Answer-block quality: does the passage read like a direct, quotable answer?

use std::sync::LazyLock;

use super::passage::{word_count, Passage};
use super::rules::{DimensionScorer, Rule, Target};
use super::Dimension;

const EARLY_ANSWER_WORDS: usize = 60;
const CLEAR_SENTENCE_WORDS: std::ops::RangeInclusive<usize> = 5..=25;
const CLARITY_POINTS: f64 = 10.0;

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule::once(
            "definition",
            r"(?i)\b\w+\s+is\s+(?:a|an|the)\s|\b\w+\s+refers?\s+to\s|\b\w+\s+means?\s|\b\w+\s+(?:can be |are )?defined\s+as\s|\bin\s+(?:simple|other)\s+(?:terms|words)\s*,",
            15,
        ),
        Rule::once(
            "early_answer",
            r"(?i)\b(?:is|are|was|were|means?|refers?)\b|\d+%|\$[\d,]+|\d+\s+(?:million|billion|thousand)",
            15,
        )
        .on(Target::LeadingWords(EARLY_ANSWER_WORDS)),
        Rule::once("question_heading", r"\?$", 10).on(Target::Heading),
        Rule::once(
            "attribution",
            r"(?i)according to|research shows|stud(?:y|ies) (?:show|indicate|suggest|found)|data (?:shows|indicates|suggests)",
            10,
        ),
    ]
});

pub struct AnswerBlockQuality;

impl DimensionScorer for AnswerBlockQuality {
    fn dimension(&self) -> Dimension {
        Dimension::AnswerBlockQuality
    }

    fn rules(&self) -> &[Rule] {
        &RULES
    }

    /// Share of sentences that are 5 to 25 words long, scaled to 10.
    fn measure(&self, passage: &Passage) -> u32 {
        let sentences = passage.sentences();
        if sentences.is_empty() {
            return 0;
        }
        let clear = sentences
            .iter()
            .filter(|s| CLEAR_SENTENCE_WORDS.contains(&word_count(s)))
            .count();
        (CLARITY_POINTS * clear as f64 / sentences.len() as f64).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str, heading: Option<&str>) -> u32 {
        AnswerBlockQuality.raw_score(&Passage::new(text, heading))
    }

    fn award(rule: &str, text: &str) -> u32 {
        let passage = Passage::new(text, None);
        RULES
            .iter()
            .find(|r| r.name == rule)
            .map(|r| r.award(&passage))
            .unwrap()
    }

    #[test]
    fn definition_patterns() {
        assert_eq!(award("definition", "GEO is a discipline for search"), 15);
        assert_eq!(award("definition", "The term refers to content shaping"), 15);
        assert_eq!(award("definition", "Citability means being quoted"), 15);
        assert_eq!(award("definition", "It can be defined as a score"), 15);
        assert_eq!(award("definition", "In simple terms, quote me"), 15);
        assert_eq!(award("definition", "Nothing definitional here at all"), 0);
    }

    #[test]
    fn definition_awards_once() {
        assert_eq!(
            award("definition", "GEO is a practice. SEO is a practice. AEO means answers."),
            15
        );
    }

    #[test]
    fn early_answer_only_in_first_sixty_words() {
        let filler = vec!["word"; 60].join(" ");
        assert_eq!(award("early_answer", &format!("{filler} 45% growth")), 0);
        assert_eq!(award("early_answer", &format!("45% growth {filler}")), 15);
        assert_eq!(award("early_answer", "Revenue hit 3 billion"), 15);
        assert_eq!(award("early_answer", "Costs fell to $1,200 quickly"), 15);
    }

    #[test]
    fn question_heading_bonus() {
        let text = "Plain words without any assertion verbs here";
        assert_eq!(raw(text, Some("What is GEO?")) - raw(text, Some("About GEO")), 10);
        assert_eq!(raw(text, None), raw(text, Some("About GEO")));
    }

    #[test]
    fn clarity_ratio_rounds() {
        // two clear sentences, one too short: 10 * 2/3 = 6.67 -> 7
        let text = "Alpha beta gamma delta epsilon zeta. Eta theta iota kappa lambda mu. Nu xi.";
        assert_eq!(AnswerBlockQuality.measure(&Passage::new(text, None)), 7);
    }

    #[test]
    fn attribution_phrases() {
        assert_eq!(award("attribution", "According to Gartner, usage grew"), 10);
        assert_eq!(award("attribution", "Studies show that readers skim"), 10);
        assert_eq!(award("attribution", "The data suggests otherwise"), 10);
        assert_eq!(award("attribution", "We think so"), 0);
    }

    #[test]
    fn clamped_to_cap() {
        let text = "GEO is a discipline that shapes content for answer engines. \
                    According to recent research, 40% of searches end in an AI answer.";
        let passage = Passage::new(text, Some("What is GEO?"));
        assert!(AnswerBlockQuality.raw_score(&passage) > 30);
        assert_eq!(AnswerBlockQuality.score(&passage, 30), 30);
    }

    #[test]
    fn empty_scores_zero_even_with_question_heading() {
        let passage = Passage::new("", Some("Why?"));
        assert_eq!(AnswerBlockQuality.score(&passage, 30), 0);
    }
}
