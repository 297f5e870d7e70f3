mod config;
mod errors;
mod export;
mod form;
mod models;
mod preview;
mod render;
mod session;
mod theme;

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::errors::AppError;
use crate::export::{ExportAdapter, ExportConfig, WkhtmltopdfRasterizer};
use crate::preview::{FilePreview, PreviewSink};
use crate::session::{Notice, Session, SessionTimings, UiEvent};
use crate::theme::{FilePreferenceStore, ThemeController};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric settings)
    let config = Config::from_env()?;

    // Initialize structured logging. Stdout carries notices, so logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));

    let mut session = build_session(&config);
    info!(
        "Preview file: {}, exports into: {}",
        config.preview_path.display(),
        config.export_dir.display()
    );

    let mut stdout = std::io::stdout();
    emit(&mut stdout, &session.start().context("initial preview failed")?)?;
    run(BufReader::new(tokio::io::stdin()), &mut stdout, &mut session).await?;
    info!("Session closed");

    Ok(())
}

/// Feeds event lines from `input` into the session until input closes, then
/// lets pending timers and exports run to completion. Every notice goes to `out`.
async fn run<R, W, P>(mut input: R, out: &mut W, session: &mut Session<P>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    P: PreviewSink,
{
    // Raw bytes so one undecodable line cannot end the session. A read
    // interrupted by a wake keeps its partial line in `line`.
    let mut line = Vec::new();
    loop {
        tokio::select! {
            read = input.read_until(b'\n', &mut line) => {
                if read.context("failed to read UI event")? == 0 {
                    break;
                }
                let notices = line_notices(session, &line);
                line.clear();
                emit(out, &notices)?;
            }
            wake = session.wait_pending() => {
                emit(out, &session.on_wake(wake))?;
            }
        }
    }

    emit(out, &session.drain().await)?;
    Ok(())
}

/// Decodes one raw event line and applies it. Blank lines produce nothing.
fn line_notices<P: PreviewSink>(session: &mut Session<P>, raw: &[u8]) -> Vec<Notice> {
    let event = std::str::from_utf8(raw)
        .map_err(|e| AppError::Validation(format!("event line is not valid UTF-8: {e}")))
        .and_then(|line| {
            let line = line.trim();
            if line.is_empty() {
                Ok(None)
            } else {
                UiEvent::parse(line).map(Some)
            }
        });
    match event {
        Ok(Some(event)) => session.handle(event),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Rejected event line: {e}");
            vec![Notice::from_error(&e)]
        }
    }
}

/// Wires the file-backed collaborators described by `config` into a session.
fn build_session(config: &Config) -> Session<FilePreview> {
    let theme = ThemeController::load(Box::new(FilePreferenceStore::new(
        &config.preferences_path,
    )));
    let rasterizer = Arc::new(WkhtmltopdfRasterizer::new(&config.rasterizer_bin));
    let exporter = ExportAdapter::new(rasterizer, ExportConfig::default(), &config.export_dir);
    info!(
        "Export: {} ({:?}, {}in margins)",
        config.rasterizer_bin.display(),
        exporter.config().page_format,
        exporter.config().margin_in
    );

    Session::new(
        FilePreview::new(&config.preview_path),
        theme,
        exporter,
        SessionTimings::from(config),
    )
}

/// Writes each notice as one JSON line.
fn emit<W: Write>(out: &mut W, notices: &[Notice]) -> Result<()> {
    for notice in notices {
        serde_json::to_writer(&mut *out, notice)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
