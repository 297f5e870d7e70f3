//! Preview Sink: where the latest render ends up.

use std::path::PathBuf;

use tracing::debug;

use crate::errors::AppError;
use crate::render::{render_document, PLACEHOLDER_HTML};
use crate::theme::Theme;

/// Content of the preview container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// No name entered yet.
    Placeholder,
    Rendered(String),
}

impl Preview {
    pub fn markup(&self) -> &str {
        match self {
            Preview::Placeholder => PLACEHOLDER_HTML,
            Preview::Rendered(html) => html,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Preview::Placeholder)
    }
}

/// Receives every completed preview. Each call replaces the previous content.
pub trait PreviewSink: Send {
    fn set_preview(&mut self, preview: &Preview, theme: Theme) -> Result<(), AppError>;
}

/// Keeps the latest preview in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPreview {
    current: Option<Preview>,
    theme: Option<Theme>,
    updates: usize,
}

#[cfg(test)]
impl MemoryPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Preview> {
        self.current.as_ref()
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    /// Number of times the preview has been replaced.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

#[cfg(test)]
impl PreviewSink for MemoryPreview {
    fn set_preview(&mut self, preview: &Preview, theme: Theme) -> Result<(), AppError> {
        self.current = Some(preview.clone());
        self.theme = Some(theme);
        self.updates += 1;
        Ok(())
    }
}

/// Rewrites a standalone HTML document on every update so it can be opened in a browser.
#[derive(Debug, Clone)]
pub struct FilePreview {
    path: PathBuf,
}

impl FilePreview {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreviewSink for FilePreview {
    fn set_preview(&mut self, preview: &Preview, theme: Theme) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, render_document(preview.markup(), theme))?;
        debug!("Preview written to {}", self.path.display());
        Ok(())
    }
}
