//! Rasterizer: pluggable, trait-based collaborator that turns an HTML document into a PDF.
//!
//! Default: `WkhtmltopdfRasterizer` (shells out to the wkhtmltopdf binary).
//! The session holds an `Arc<dyn Rasterizer>`, so tests swap in an in-process fake.

use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::process::Command;
use tracing::debug;

use crate::errors::AppError;
use crate::export::config::ExportConfig;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait Rasterizer: Send + Sync {
    /// Produces the bytes of a paginated document for `document` (a full HTML page).
    async fn rasterize(&self, document: &str, config: &ExportConfig) -> Result<Bytes, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// WkhtmltopdfRasterizer
// ────────────────────────────────────────────────────────────────────────────

/// Writes the document to a temp file and runs `wkhtmltopdf <flags> <input> -`,
/// reading the PDF from stdout.
#[derive(Debug, Clone)]
pub struct WkhtmltopdfRasterizer {
    binary: PathBuf,
}

impl WkhtmltopdfRasterizer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl Rasterizer for WkhtmltopdfRasterizer {
    async fn rasterize(&self, document: &str, config: &ExportConfig) -> Result<Bytes, AppError> {
        let mut input = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".html")
            .tempfile()?;
        input.write_all(document.as_bytes())?;
        input.flush()?;

        let args = wkhtmltopdf_args(config);
        debug!("Running {} {}", self.binary.display(), args.join(" "));

        let output = Command::new(&self.binary)
            .args(&args)
            .arg(input.path())
            .arg("-")
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                AppError::Export(format!("failed to launch {}: {e}", self.binary.display()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Export(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                output.status,
                stderr.trim()
            )));
        }
        if output.stdout.is_empty() {
            return Err(AppError::Export(format!(
                "{} produced no output",
                self.binary.display()
            )));
        }

        Ok(Bytes::from(output.stdout))
    }
}

/// Maps the export configuration onto wkhtmltopdf command-line flags.
pub fn wkhtmltopdf_args(config: &ExportConfig) -> Vec<String> {
    let margin = format!("{}in", config.margin_in);
    let mut args = vec!["--quiet".to_string()];
    for side in ["--margin-top", "--margin-right", "--margin-bottom", "--margin-left"] {
        args.push(side.to_string());
        args.push(margin.clone());
    }
    args.push("--page-size".to_string());
    args.push(config.page_format.as_str().to_string());
    args.push("--orientation".to_string());
    args.push(config.orientation.as_str().to_string());
    args.push("--image-quality".to_string());
    args.push(config.image_quality_percent().to_string());
    args.push("--dpi".to_string());
    args.push(config.dpi().to_string());
    args
}
