use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use citability::report::{self, AnalysisOutcome};
use citability::Settings;

#[derive(Parser)]
#[command(
    name = "citability",
    about = "Score a page's passages for how likely AI answer engines are to cite them"
)]
struct Cli {
    /// Page to analyze (also used as the report label)
    url: String,

    /// Analyze markup from a local file instead of fetching the URL
    #[arg(long, value_name = "PATH")]
    html_file: Option<PathBuf>,

    /// Print a readable summary table instead of JSON
    #[arg(long)]
    summary: bool,

    /// Settings file (TOML); defaults to ./citability.toml when present
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    let outcome = match &cli.html_file {
        Some(path) => {
            let page = report::analyze_file(&cli.url, path, &settings)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            AnalysisOutcome::Report(Box::new(page))
        }
        None => report::analyze_page_citability(&cli.url, &settings).await,
    };

    let code = match &outcome {
        AnalysisOutcome::Report(page) if cli.summary => {
            print!("{}", report::render_summary(page));
            ExitCode::SUCCESS
        }
        AnalysisOutcome::Failed { error } if cli.summary => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
        _ => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            if matches!(outcome, AnalysisOutcome::Failed { .. }) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    };

    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(code)
}
