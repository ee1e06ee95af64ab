use crate::domain::model::CopyItem;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "review-seo")]
#[command(about = "Send product reviews or an ASIN to the review analysis webhook")]
pub struct CliConfig {
    /// CSV or PDF file with reviews
    #[arg(short, long, conflicts_with = "asin")]
    pub file: Option<PathBuf>,

    /// Amazon product identifier
    #[arg(short, long)]
    pub asin: Option<String>,

    /// Declared MIME type of --file (defaults to a guess from the extension)
    #[arg(long, requires = "file")]
    pub mime_type: Option<String>,

    /// Webhook URL (overrides REVIEW_SEO_WEBHOOK_URL and the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Copy generated content to the clipboard
    #[arg(long, value_enum)]
    pub copy: Vec<CopyItem>,

    /// Print the raw analysis JSON instead of the dashboard
    #[arg(long)]
    pub json: bool,

    /// Directory to save the analysis JSON into
    #[arg(short, long)]
    pub output: Option<String>,

    /// Show what would be sent without calling the webhook
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            validate_url("--endpoint", endpoint)?;
        }
        if let Some(output) = &self.output {
            validate_path("--output", output)?;
        }
        Ok(())
    }
}
