pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::AppConfig, ResolvedConfig};
pub use core::{
    copy_state::CopyState,
    form::FormState,
    render::Dashboard,
    submission::{SubmissionPipeline, SubmissionState},
};
pub use utils::error::{AppError, Result};
