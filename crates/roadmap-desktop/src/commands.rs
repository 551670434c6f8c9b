//! Application commands: generate, export and open.
//!
//! Each command reports failures as a single user-facing error; none of
//! them leave the coordinator outside Idle.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use roadmap_bedrock::generate::RoadmapGenerator;
use roadmap_export::error::ExportError;
use thiserror::Error;
use tracing::{info, warn};

use crate::coordinator::{CoordinatorError, RoadmapOutcome};
use crate::state::{AppState, PdfExporter};

pub const CANCELLED_NOTICE: &str = "Roadmap generation was cancelled.";

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];
const SPINNER_INTERVAL: Duration = Duration::from_millis(150);

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("No PDF file has been generated yet.")]
    NotFound(PathBuf),

    #[error("Failed to open PDF: {0}")]
    Launch(#[from] std::io::Error),
}

/// Submit a request and wait for it, showing progress on stderr.
///
/// Ctrl-C cancels the request. Returns `None` when cancelled.
pub async fn generate<G: RoadmapGenerator + 'static>(
    state: &AppState<G>,
    topic: &str,
    duration_days: &str,
    level: &str,
) -> Result<Option<String>, CoordinatorError> {
    let pending = state.coordinator.submit(topic, duration_days, level)?;

    let wait = pending.wait();
    tokio::pin!(wait);
    let mut ticker = tokio::time::interval(SPINNER_INTERVAL);
    let mut frame = 0usize;
    let mut cancel_sent = false;

    let outcome = loop {
        tokio::select! {
            outcome = &mut wait => break outcome,
            _ = tokio::signal::ctrl_c(), if !cancel_sent => {
                cancel_sent = true;
                state.coordinator.cancel();
            }
            _ = ticker.tick() => {
                let mut stderr = std::io::stderr().lock();
                let _ = write!(stderr, "\r{} Generating roadmap... (Ctrl-C to cancel)", SPINNER[frame % SPINNER.len()]);
                let _ = stderr.flush();
                frame += 1;
            }
        }
    };
    eprint!("\r\x1b[2K");

    match outcome? {
        RoadmapOutcome::Delivered(text) => Ok(Some(text)),
        RoadmapOutcome::Cancelled => Ok(None),
    }
}

/// Render raw roadmap text to the exporter's path.
///
/// Concurrent exports are serialised so the fixed path is never written
/// by two renders at once. The render and write run on the blocking pool.
pub async fn export_pdf(exporter: &PdfExporter, raw: &str) -> Result<PathBuf, ExportError> {
    let _lock = exporter.lock.lock().await;

    let raw = raw.to_string();
    let path = exporter.path.clone();
    let styles = exporter.styles.clone();
    tokio::task::spawn_blocking(move || roadmap_export::pdf::export_pdf(&raw, &path, &styles))
        .await
        .map_err(|e| ExportError::Pdf(format!("export task failed: {e}")))?
        .inspect_err(|e| warn!(error = %e, "PDF export failed"))?;

    Ok(exporter.path.clone())
}

/// Open a file with the operating system's default handler.
pub fn open_pdf(path: &Path) -> Result<(), OpenError> {
    if !path.exists() {
        return Err(OpenError::NotFound(path.to_path_buf()));
    }

    let mut command = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };

    command.arg(path).spawn()?;
    info!(path = %path.display(), "opened PDF");
    Ok(())
}
