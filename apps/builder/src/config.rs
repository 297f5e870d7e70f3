use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numeric values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTML file the live preview is written to.
    pub preview_path: PathBuf,
    /// Directory exported PDFs are written into.
    pub export_dir: PathBuf,
    /// JSON file backing the durable preference store (theme).
    pub preferences_path: PathBuf,
    /// Executable used to rasterize the preview into a PDF.
    pub rasterizer_bin: PathBuf,
    pub debounce: Duration,
    pub generate_delay: Duration,
    pub rust_log: String,
}

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_GENERATE_DELAY_MS: u64 = 1000;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            preview_path: env_or("PREVIEW_PATH", "resume_preview.html").into(),
            export_dir: env_or("EXPORT_DIR", ".").into(),
            preferences_path: env_or("PREFERENCES_PATH", ".resume-builder/preferences.json")
                .into(),
            rasterizer_bin: env_or("RASTERIZER_BIN", "wkhtmltopdf").into(),
            debounce: Duration::from_millis(parse_env("DEBOUNCE_MS", DEFAULT_DEBOUNCE_MS)?),
            generate_delay: Duration::from_millis(parse_env(
                "GENERATE_DELAY_MS",
                DEFAULT_GENERATE_DELAY_MS,
            )?),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid number, got '{raw}'"))
}
