pub mod answer;
pub mod containment;
pub mod grade;
pub mod passage;
pub mod readability;
pub mod rules;
pub mod statistics;
pub mod uniqueness;

use serde::Serialize;

use answer::AnswerBlockQuality;
use containment::SelfContainment;
use grade::{Grade, Rubric};
use passage::Passage;
use readability::StructuralReadability;
use rules::DimensionScorer;
use statistics::StatisticalDensity;
use uniqueness::UniquenessSignals;

/// The five independent citability dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    AnswerBlockQuality,
    SelfContainment,
    StructuralReadability,
    StatisticalDensity,
    UniquenessSignals,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::AnswerBlockQuality,
        Dimension::SelfContainment,
        Dimension::StructuralReadability,
        Dimension::StatisticalDensity,
        Dimension::UniquenessSignals,
    ];
}

static SCORERS: [&dyn DimensionScorer; 5] = [
    &AnswerBlockQuality,
    &SelfContainment,
    &StructuralReadability,
    &StatisticalDensity,
    &UniquenessSignals,
];

/// Capped sub-score per dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    pub answer_block_quality: u32,
    pub self_containment: u32,
    pub structural_readability: u32,
    pub statistical_density: u32,
    pub uniqueness_signals: u32,
}

impl Breakdown {
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::AnswerBlockQuality => self.answer_block_quality,
            Dimension::SelfContainment => self.self_containment,
            Dimension::StructuralReadability => self.structural_readability,
            Dimension::StatisticalDensity => self.statistical_density,
            Dimension::UniquenessSignals => self.uniqueness_signals,
        }
    }

    fn set(&mut self, dimension: Dimension, score: u32) {
        let slot = match dimension {
            Dimension::AnswerBlockQuality => &mut self.answer_block_quality,
            Dimension::SelfContainment => &mut self.self_containment,
            Dimension::StructuralReadability => &mut self.structural_readability,
            Dimension::StatisticalDensity => &mut self.statistical_density,
            Dimension::UniquenessSignals => &mut self.uniqueness_signals,
        };
        *slot = score;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub heading: Option<String>,
    pub word_count: usize,
    pub total_score: u32,
    pub grade: Grade,
    pub label: String,
    pub breakdown: Breakdown,
    pub preview: String,
}

/// Score one passage against every dimension and grade the total.
pub fn score_passage(text: &str, heading: Option<&str>, rubric: &Rubric) -> ScoreResult {
    let passage = Passage::new(text, heading);

    let mut breakdown = Breakdown::default();
    for scorer in SCORERS {
        let dimension = scorer.dimension();
        breakdown.set(dimension, scorer.score(&passage, rubric.cap(dimension)));
    }

    let total_score = rubric.total(&breakdown);
    let grade = rubric.grade(total_score);

    ScoreResult {
        heading: heading.map(str::to_string),
        word_count: passage.word_count(),
        total_score,
        grade,
        label: grade.label().to_string(),
        breakdown,
        preview: passage.preview(),
    }
}
