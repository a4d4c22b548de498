use std::time::Duration;

use clap::Parser;
use services::ApiConfig;
use services::api::{DEFAULT_BASE_URL, DEFAULT_LESSONS_PATH};

#[derive(Debug, Parser)]
#[command(
    name = "asl",
    version,
    about = "Desktop client for learning American Sign Language",
    long_about = None
)]
pub struct Args {
    /// Base url of the ASL API.
    #[arg(long, env = "ASL_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// Access token to start signed in with.
    #[arg(long, env = "ASL_AUTH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path of the lesson listing, relative to the base url.
    #[arg(long, env = "ASL_LESSONS_PATH", default_value = DEFAULT_LESSONS_PATH)]
    pub lessons_path: String,

    /// Log filter; takes precedence over `RUST_LOG`.
    #[arg(long, env = "ASL_LOG")]
    pub log_level: Option<String>,

    /// HTTP request timeout in seconds.
    #[arg(
        long,
        env = "ASL_HTTP_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
}

pub const DEFAULT_LOG_LEVEL: &str = "info";

impl Args {
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api_base_url.trim_end_matches('/'))
            .with_lessons_path(self.lessons_path.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }

    /// Filter directive: `--log-level` / `ASL_LOG`, then `RUST_LOG`, then `info`.
    #[must_use]
    pub fn log_directive(&self, rust_log: Option<&str>) -> String {
        self.log_level
            .as_deref()
            .or(rust_log)
            .filter(|directive| !directive.trim().is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .to_string()
    }
}
