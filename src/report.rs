use std::collections::BTreeMap;
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::fetch;
use crate::parser::{self, ContentBlock};
use crate::scoring::grade::Grade;
use crate::scoring::{score_passage, ScoreResult};

/// Page-level roll-up of every scored block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageReport {
    pub url: String,
    pub total_blocks_analyzed: usize,
    pub average_citability_score: f64,
    pub optimal_length_passages: usize,
    pub grade_distribution: BTreeMap<Grade, usize>,
    pub top_5_citable: Vec<ScoreResult>,
    pub bottom_5_citable: Vec<ScoreResult>,
    pub all_blocks: Vec<ScoreResult>,
}

/// Either a report or the reason the page could not be analyzed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Report(Box<PageReport>),
    Failed { error: String },
}

/// Fetch `url` and analyze it. Fetch failures come back as [`AnalysisOutcome::Failed`]
/// and no segmentation is attempted.
pub async fn analyze_page_citability(url: &str, settings: &Settings) -> AnalysisOutcome {
    match fetch::fetch_html(url, &settings.fetch).await {
        Ok(html) => AnalysisOutcome::Report(Box::new(analyze_html(url, &html, settings))),
        Err(e) => {
            warn!("Analysis aborted for {}: {}", url, e);
            AnalysisOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}

/// Segment already-fetched markup and analyze the resulting blocks.
pub fn analyze_html(url: &str, html: &str, settings: &Settings) -> PageReport {
    let blocks = parser::extract_content_blocks(html, &settings.segmenter);
    analyze_blocks(url, &blocks, settings)
}

/// Analyze markup saved on disk; `url` only labels the report.
pub fn analyze_file(url: &str, path: &Path, settings: &Settings) -> Result<PageReport> {
    let html = std::fs::read_to_string(path)?;
    Ok(analyze_html(url, &html, settings))
}

/// Score pre-segmented blocks and compute page statistics.
pub fn analyze_blocks(url: &str, blocks: &[ContentBlock], settings: &Settings) -> PageReport {
    let scored: Vec<ScoreResult> = blocks
        .par_iter()
        .map(|b| score_passage(&b.content, b.heading.as_deref(), &settings.rubric))
        .collect();

    let report = build_report(url, scored, settings);
    info!(
        blocks = report.total_blocks_analyzed,
        average = report.average_citability_score,
        optimal = report.optimal_length_passages,
        "Analyzed {}",
        url
    );
    report
}

fn build_report(url: &str, scored: Vec<ScoreResult>, settings: &Settings) -> PageReport {
    let top_n = settings.report.top_n;

    let average = if scored.is_empty() {
        0.0
    } else {
        let sum: u32 = scored.iter().map(|s| s.total_score).sum();
        round_one_decimal(sum as f64 / scored.len() as f64)
    };

    let optimal = scored
        .iter()
        .filter(|s| settings.report.is_optimal_length(s.word_count))
        .count();

    let mut grade_distribution: BTreeMap<Grade, usize> =
        Grade::ALL.iter().map(|g| (*g, 0)).collect();
    for s in &scored {
        *grade_distribution.entry(s.grade).or_default() += 1;
    }

    // `sort_by` is stable, so ties keep page order.
    let mut descending = scored.clone();
    descending.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    descending.truncate(top_n);

    let mut ascending = scored.clone();
    ascending.sort_by(|a, b| a.total_score.cmp(&b.total_score));
    ascending.truncate(top_n);

    PageReport {
        url: url.to_string(),
        total_blocks_analyzed: scored.len(),
        average_citability_score: average,
        optimal_length_passages: optimal,
        grade_distribution,
        top_5_citable: descending,
        bottom_5_citable: ascending,
        all_blocks: scored,
    }
}

fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Human-readable overview for the terminal.
pub fn render_summary(report: &PageReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Citability: {}\n", report.url));
    out.push_str(&format!("Blocks analyzed: {}\n", report.total_blocks_analyzed));
    out.push_str(&format!("Average score:   {:.1}\n", report.average_citability_score));
    out.push_str(&format!("Optimal length:  {}\n", report.optimal_length_passages));

    let grades: Vec<String> = report
        .grade_distribution
        .iter()
        .map(|(g, n)| format!("{} {}", g, n))
        .collect();
    out.push_str(&format!("Grades:          {}\n", grades.join(" | ")));

    if report.all_blocks.is_empty() {
        out.push_str("\nNo content blocks found.\n");
        return out;
    }

    for (title, rows) in [
        ("Most citable", &report.top_5_citable),
        ("Least citable", &report.bottom_5_citable),
    ] {
        out.push_str(&format!("\n--- {} ---\n", title));
        out.push_str(&format!(
            "{:>3} | {:>5} | {:<5} | {:>5} | {:<40}\n",
            "#", "Score", "Grade", "Words", "Heading"
        ));
        out.push_str(&format!("{}\n", "-".repeat(70)));
        for (i, r) in rows.iter().enumerate() {
            let heading = truncate(r.heading.as_deref().unwrap_or("-"), 40);
            out.push_str(&format!(
                "{:>3} | {:>5} | {:<5} | {:>5} | {:<40}\n",
                i + 1,
                r.total_score,
                r.grade.to_string(),
                r.word_count,
                heading
            ));
        }
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
