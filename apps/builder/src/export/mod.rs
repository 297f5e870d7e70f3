// Export Adapter
// Turns the current preview into a downloadable PDF via a Rasterizer collaborator.
// The adapter owns the filename rule and the page configuration; rasterization is delegated.

pub mod config;
pub mod rasterizer;

pub use config::ExportConfig;
pub use rasterizer::{Rasterizer, WkhtmltopdfRasterizer};

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::preview::Preview;
use crate::render::render_document;
use crate::theme::Theme;

/// Result of a finished export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub size_bytes: usize,
    pub finished_at: DateTime<Utc>,
}

/// An export in flight. Owns everything it needs, so it can be polled while the
/// session keeps handling events.
pub struct ExportJob {
    pub filename: String,
    future: Pin<Box<dyn Future<Output = Result<ExportedFile, AppError>> + Send>>,
}

impl ExportJob {
    /// Drives the export to completion. Cancel-safe: dropping the returned future
    /// leaves the job intact and resumable.
    pub async fn wait(&mut self) -> Result<ExportedFile, AppError> {
        (&mut self.future).await
    }
}

#[derive(Clone)]
pub struct ExportAdapter {
    rasterizer: Arc<dyn Rasterizer>,
    config: ExportConfig,
    output_dir: PathBuf,
}

impl ExportAdapter {
    pub fn new(
        rasterizer: Arc<dyn Rasterizer>,
        config: ExportConfig,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            rasterizer,
            config,
            output_dir: output_dir.into(),
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Starts exporting `preview`. Fails immediately if there is nothing to export.
    pub fn start(
        &self,
        preview: &Preview,
        full_name: &str,
        theme: Theme,
    ) -> Result<ExportJob, AppError> {
        if preview.is_placeholder() {
            return Err(AppError::Validation(
                "nothing to export: enter a name first".to_string(),
            ));
        }

        let filename = export_filename(full_name);
        let path = self.output_dir.join(&filename);
        let document = render_document(preview.markup(), theme);
        let rasterizer = Arc::clone(&self.rasterizer);
        let config = self.config.clone();
        let output_dir = self.output_dir.clone();

        info!("Export started: {}", path.display());

        let future = async move {
            let pdf = rasterizer.rasterize(&document, &config).await?;
            tokio::fs::create_dir_all(&output_dir).await?;
            tokio::fs::write(&path, &pdf).await?;
            info!("Export finished: {} ({} bytes)", path.display(), pdf.len());
            Ok(ExportedFile {
                path,
                size_bytes: pdf.len(),
                finished_at: Utc::now(),
            })
        };

        Ok(ExportJob {
            filename,
            future: Box::pin(future),
        })
    }
}

/// `"<full name>_resume.pdf"`, or `"resume_resume.pdf"` when no name is set.
/// Path separators in the name are replaced so the file stays in the export directory.
pub fn export_filename(full_name: &str) -> String {
    let stem = if full_name.is_empty() {
        "resume".to_string()
    } else {
        full_name.replace(['/', '\\'], "_")
    };
    format!("{stem}_resume.pdf")
}
