// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use resume_matcher::{
    EngineConfig, HttpEnhancer, ResumeAnalyzer, SkillTaxonomy,
};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Score a resume against a job posting and print the report as JSON.
#[derive(Parser, Debug)]
#[command(name = "resumatch", version, about)]
struct Args {
    /// Path to the resume text file
    resume: PathBuf,

    /// Path to the job posting text file
    job: PathBuf,

    /// Optional TOML file with a custom skill taxonomy
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Base URL of an extraction enhancer service
    #[arg(long)]
    enhancer_url: Option<String>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let resume_text = std::fs::read_to_string(&args.resume)
        .with_context(|| format!("Failed to read resume file {}", args.resume.display()))?;
    let job_text = std::fs::read_to_string(&args.job)
        .with_context(|| format!("Failed to read job posting file {}", args.job.display()))?;

    let taxonomy = match &args.taxonomy {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read taxonomy file {}", path.display()))?;
            SkillTaxonomy::from_toml_str(&content)
                .with_context(|| format!("Invalid taxonomy in {}", path.display()))?
        }
        None => SkillTaxonomy::default(),
    };

    let mut analyzer = ResumeAnalyzer::new(EngineConfig::default(), taxonomy)
        .context("Failed to build analyzer")?;
    if let Some(url) = &args.enhancer_url {
        analyzer = analyzer.with_enhancer(Arc::new(HttpEnhancer::new(url.clone())?));
    }

    let report = analyzer.analyze(&resume_text, &job_text).await;

    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", json);
    Ok(())
}
