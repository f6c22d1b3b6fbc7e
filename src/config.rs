use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{CitabilityError, Result};
use crate::scoring::grade::Rubric;

const ENV_PREFIX: &str = "CITABILITY";
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Everything tunable about a run. Missing keys fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fetch: FetchConfig,
    pub segmenter: SegmenterConfig,
    pub rubric: Rubric,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Thresholds the segmenter applies while grouping elements under headings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Blocks with fewer words are dropped.
    pub min_block_words: usize,
    /// Body elements with fewer words never reach the accumulator.
    pub min_element_words: usize,
    /// Heading assigned to content that precedes the first heading.
    pub default_heading: String,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            min_block_words: 20,
            min_element_words: 5,
            default_heading: "Introduction".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Length of the top/bottom lists.
    pub top_n: usize,
    pub optimal_min_words: usize,
    pub optimal_max_words: usize,
}

impl ReportConfig {
    pub fn is_optimal_length(&self, word_count: usize) -> bool {
        (self.optimal_min_words..=self.optimal_max_words).contains(&word_count)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            optimal_min_words: 134,
            optimal_max_words: 167,
        }
    }
}

impl Settings {
    /// Layer an optional TOML file under `CITABILITY_*` environment variables.
    ///
    /// Nested keys use a double underscore: `CITABILITY_FETCH__TIMEOUT_SECS=10`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.unwrap_or_else(|| Path::new("citability.toml"));
        let settings: Settings = Config::builder()
            .add_source(File::from(file).required(path.is_some()))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.rubric.validate().map_err(CitabilityError::Config)?;
        if self.segmenter.min_block_words == 0 {
            return Err(CitabilityError::Config(
                "segmenter.min_block_words must be greater than 0".into(),
            ));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(CitabilityError::Config(
                "fetch.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.report.top_n == 0 {
            return Err(CitabilityError::Config(
                "report.top_n must be greater than 0".into(),
            ));
        }
        if self.report.optimal_min_words > self.report.optimal_max_words {
            return Err(CitabilityError::Config(format!(
                "report.optimal_min_words ({}) exceeds report.optimal_max_words ({})",
                self.report.optimal_min_words, self.report.optimal_max_words
            )));
        }
        Ok(())
    }
}
