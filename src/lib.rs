//! Estimate how likely a page's passages are to be quoted by AI answer engines.
//!
//! Markup is split into heading-scoped [`ContentBlock`]s, every block is scored on
//! five weighted dimensions, and the scores roll up into a [`PageReport`].

pub mod config;
pub mod error;
pub mod fetch;
pub mod parser;
pub mod report;
pub mod scoring;

pub use crate::config::Settings;
pub use crate::error::{CitabilityError, Result};
pub use parser::{extract_content_blocks, ContentBlock};
pub use report::{
    analyze_blocks, analyze_file, analyze_html, analyze_page_citability, AnalysisOutcome, PageReport,
};
pub use scoring::grade::{Grade, Rubric};
pub use scoring::{score_passage, Breakdown, Dimension, ScoreResult};
