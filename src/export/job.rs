//! Background export with a scoped busy flag.
//!
//! The UI thread captures a [`DashboardSnapshot`], hands it to a worker
//! thread together with a renderer, and polls for the outcome once per tick.
//! While a worker runs, its [`ExportGuard`] keeps the shared busy flag set;
//! dropping the guard clears it on every exit path, panics included.

use super::snapshot::{DashboardSnapshot, SnapshotRenderer};
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::{Arc, LazyLock};
use std::thread;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s/\\]+").expect("separator pattern is valid"));

/// Suffix appended to every exported file name.
pub const FILE_NAME_SUFFIX: &str = "Board-Meeting-Dashboard";

/// Builds the export file name for an organization.
///
/// Each run of whitespace or path separators in `organization_name` becomes
/// a single hyphen, so the result is always a bare file name.
///
/// # Examples
///
/// ```
/// use agendaboard::export::export_file_name;
///
/// assert_eq!(
///     export_file_name("Goats  of Anarchy", "svg"),
///     "Goats-of-Anarchy-Board-Meeting-Dashboard.svg"
/// );
/// ```
#[must_use]
pub fn export_file_name(organization_name: &str, extension: &str) -> String {
    let stem = SEPARATOR_RUN.replace_all(organization_name, "-");
    format!("{stem}-{FILE_NAME_SUFFIX}.{extension}")
}

/// Renders a snapshot and writes it to `path`.
///
/// Writes through a temp file and renames, so a failed export never leaves a
/// truncated document behind.
pub fn export_to_path(
    snapshot: &DashboardSnapshot,
    renderer: &dyn SnapshotRenderer,
    path: &Path,
) -> Result<()> {
    let document = renderer.render(snapshot).context("Failed to render snapshot")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context(format!(
            "Failed to create output directory: {}",
            parent.display()
        ))?;
    }

    let temp_path = path.with_extension(format!("{}.tmp", renderer.extension()));
    fs::write(&temp_path, document).context(format!(
        "Failed to write temp export file: {}",
        temp_path.display()
    ))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).context(format!(
            "Failed to rename temp export file to: {}",
            path.display()
        ));
    }

    Ok(())
}

/// Renders a snapshot into `dir` under its standard file name.
///
/// Returns the path of the written file.
pub fn export_to_file(
    snapshot: &DashboardSnapshot,
    renderer: &dyn SnapshotRenderer,
    dir: &Path,
) -> Result<PathBuf> {
    let path = dir.join(export_file_name(
        &snapshot.data.organization_name,
        renderer.extension(),
    ));
    export_to_path(snapshot, renderer, &path)?;
    Ok(path)
}

/// Holds the busy flag for the lifetime of one export.
#[derive(Debug)]
pub struct ExportGuard {
    flag: Arc<AtomicBool>,
}

impl ExportGuard {
    /// Sets the flag if it is clear.
    ///
    /// Returns `None` while another guard holds it.
    #[must_use]
    pub fn try_acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self {
                flag: Arc::clone(flag),
            })
    }
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Export status tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// No export started yet
    Idle,
    /// Worker running
    Exporting,
    /// Last export finished
    Success,
    /// Last export failed
    Failed,
}

impl std::fmt::Display for ExportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Exporting => write!(f, "Exporting..."),
            Self::Success => write!(f, "✓ Exported"),
            Self::Failed => write!(f, "✗ Export failed"),
        }
    }
}

/// Messages sent from the worker to the UI thread.
#[derive(Debug, Clone)]
pub enum ExportMessage {
    /// Document written
    Complete {
        /// Path of the written file
        path: PathBuf,
    },
    /// Rendering or writing failed
    Failed {
        /// Error chain as text
        error: String,
    },
}

/// Export state polled by the UI loop.
#[derive(Debug)]
pub struct ExportState {
    /// Current status
    pub status: ExportStatus,
    /// Message channel receiver
    pub receiver: Option<Receiver<ExportMessage>>,
    /// Last status message for the status bar
    pub last_message: String,
    /// Most recent successfully written file
    pub last_output: Option<PathBuf>,
    busy: Arc<AtomicBool>,
}

impl ExportState {
    /// Creates an idle export state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: ExportStatus::Idle,
            receiver: None,
            last_message: String::new(),
            last_output: None,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Checks if an export is currently running.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Starts an export in the background.
    ///
    /// Fails without side effects if an export is already running.
    pub fn start_export(
        &mut self,
        snapshot: DashboardSnapshot,
        renderer: Box<dyn SnapshotRenderer>,
        output_dir: PathBuf,
    ) -> Result<()> {
        let Some(guard) = ExportGuard::try_acquire(&self.busy) else {
            bail!("Export already in progress");
        };
        // The previous worker reports before releasing the flag
        self.poll();

        let (sender, receiver) = channel();
        let organization = snapshot.data.organization_name.clone();

        thread::Builder::new()
            .name("export".to_string())
            .spawn(move || {
                let message = match export_to_file(&snapshot, renderer.as_ref(), &output_dir) {
                    Ok(path) => {
                        tracing::info!(path = %path.display(), "export written");
                        ExportMessage::Complete { path }
                    }
                    Err(e) => {
                        let error = format!("{e:#}");
                        tracing::error!(%error, "export failed");
                        ExportMessage::Failed { error }
                    }
                };
                let _ = sender.send(message);
                drop(guard);
            })
            .context("Failed to spawn export worker")?;

        tracing::info!(%organization, "export started");
        self.receiver = Some(receiver);
        self.status = ExportStatus::Exporting;
        self.last_message = "Exporting...".to_string();
        Ok(())
    }

    /// Polls the message channel.
    ///
    /// Returns true if the status changed.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };

        match receiver.try_recv() {
            Ok(message) => {
                self.handle_message(message);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                // Worker ended without reporting (panic)
                self.receiver = None;
                tracing::error!("export worker stopped without a result");
                self.status = ExportStatus::Failed;
                self.last_message = "Export failed: worker stopped unexpectedly".to_string();
                true
            }
        }
    }

    fn handle_message(&mut self, message: ExportMessage) {
        match message {
            ExportMessage::Complete { path } => {
                self.status = ExportStatus::Success;
                self.last_message = format!("Exported to {}", path.display());
                self.last_output = Some(path);
            }
            ExportMessage::Failed { error } => {
                self.status = ExportStatus::Failed;
                self.last_message = format!("Export failed: {error}");
            }
        }
        self.receiver = None;
    }
}

impl Default for ExportState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support;
    use crate::export::{MarkdownRenderer, SvgRenderer};
    use std::sync::mpsc::Sender;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    /// Renderer that blocks until released by the test.
    struct GatedRenderer {
        gate: Mutex<Receiver<()>>,
    }

    impl SnapshotRenderer for GatedRenderer {
        fn render(&self, _snapshot: &DashboardSnapshot) -> Result<String> {
            let _ = self.gate.lock().unwrap().recv();
            Ok("gated".to_string())
        }

        fn extension(&self) -> &'static str {
            "txt"
        }
    }

    struct PanickingRenderer;

    impl SnapshotRenderer for PanickingRenderer {
        fn render(&self, _snapshot: &DashboardSnapshot) -> Result<String> {
            panic!("renderer exploded");
        }

        fn extension(&self) -> &'static str {
            "txt"
        }
    }

    struct FailingRenderer;

    impl SnapshotRenderer for FailingRenderer {
        fn render(&self, _snapshot: &DashboardSnapshot) -> Result<String> {
            bail!("no ink left")
        }

        fn extension(&self) -> &'static str {
            "txt"
        }
    }

    fn gated() -> (Box<dyn SnapshotRenderer>, Sender<()>) {
        let (tx, rx) = channel();
        (
            Box::new(GatedRenderer {
                gate: Mutex::new(rx),
            }),
            tx,
        )
    }

    fn wait_until_settled(state: &mut ExportState) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while state.receiver.is_some() || state.is_busy() {
            state.poll();
            assert!(Instant::now() < deadline, "export did not finish in time");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_file_name_collapses_whitespace() {
        assert_eq!(
            export_file_name("Goats of Anarchy", "svg"),
            "Goats-of-Anarchy-Board-Meeting-Dashboard.svg"
        );
        assert_eq!(
            export_file_name("City\t Food\nBank", "md"),
            "City-Food-Bank-Board-Meeting-Dashboard.md"
        );
        assert_eq!(export_file_name("Solo", "svg"), "Solo-Board-Meeting-Dashboard.svg");
    }

    #[test]
    fn test_file_name_replaces_path_separators() {
        assert_eq!(
            export_file_name("Cats/Dogs Rescue", "md"),
            "Cats-Dogs-Rescue-Board-Meeting-Dashboard.md"
        );
        assert_eq!(
            export_file_name("../..\\Shelter", "svg"),
            "..-..-Shelter-Board-Meeting-Dashboard.svg"
        );
    }

    #[test]
    fn test_export_stays_inside_output_dir() {
        let temp = TempDir::new().unwrap();
        let mut snapshot = test_support::snapshot(&["A"]);
        snapshot.data.organization_name = "Cats/Dogs Rescue".to_string();

        let path = export_to_file(&snapshot, &MarkdownRenderer, temp.path()).unwrap();

        assert_eq!(path.parent(), Some(temp.path()));
        assert!(path.is_file());
        assert!(!temp.path().join("Cats").exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.md");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();

        let result = export_to_path(&test_support::snapshot(&["A"]), &MarkdownRenderer, &path);

        assert!(result.is_err());
        assert!(!temp.path().join("board.md.tmp").exists());
        assert!(path.join("occupied").exists());
    }

    #[test]
    fn test_unpolled_result_survives_next_export() {
        let temp = TempDir::new().unwrap();
        let mut state = ExportState::new();

        state
            .start_export(
                test_support::snapshot(&["A"]),
                Box::new(MarkdownRenderer),
                temp.path().to_path_buf(),
            )
            .unwrap();
        let deadline = Instant::now() + Duration::from_secs(10);
        while state.is_busy() {
            assert!(Instant::now() < deadline, "export did not finish in time");
            thread::sleep(Duration::from_millis(5));
        }

        let (renderer, release) = gated();
        state
            .start_export(test_support::snapshot(&["A"]), renderer, temp.path().join("second"))
            .unwrap();

        let first = temp.path().join("Goats-of-Anarchy-Board-Meeting-Dashboard.md");
        assert_eq!(state.last_output.as_deref(), Some(first.as_path()));
        assert_eq!(state.status, ExportStatus::Exporting);

        release.send(()).unwrap();
        wait_until_settled(&mut state);
        assert_eq!(state.status, ExportStatus::Success);
    }

    #[test]
    fn test_guard_refuses_reentry_and_releases_on_drop() {
        let flag = Arc::new(AtomicBool::new(false));
        let guard = ExportGuard::try_acquire(&flag).unwrap();
        assert!(flag.load(Ordering::Acquire));
        assert!(ExportGuard::try_acquire(&flag).is_none());

        drop(guard);
        assert!(!flag.load(Ordering::Acquire));
        assert!(ExportGuard::try_acquire(&flag).is_some());
    }

    #[test]
    fn test_second_export_refused_while_busy() {
        let temp = TempDir::new().unwrap();
        let mut state = ExportState::new();
        let (renderer, release) = gated();

        state
            .start_export(test_support::snapshot(&["A"]), renderer, temp.path().to_path_buf())
            .unwrap();
        assert!(state.is_busy());
        assert_eq!(state.status, ExportStatus::Exporting);

        let second = state.start_export(
            test_support::snapshot(&["A"]),
            Box::new(MarkdownRenderer),
            temp.path().to_path_buf(),
        );
        assert!(second.is_err());

        release.send(()).unwrap();
        wait_until_settled(&mut state);

        assert!(!state.is_busy());
        assert_eq!(state.status, ExportStatus::Success);
        let written = state.last_output.clone().unwrap();
        assert_eq!(fs::read_to_string(written).unwrap(), "gated");
    }

    #[test]
    fn test_export_writes_named_file() {
        let temp = TempDir::new().unwrap();
        let mut state = ExportState::new();

        state
            .start_export(
                test_support::snapshot(&["Budget"]),
                Box::new(SvgRenderer::default()),
                temp.path().join("nested"),
            )
            .unwrap();
        wait_until_settled(&mut state);

        let expected = temp
            .path()
            .join("nested")
            .join("Goats-of-Anarchy-Board-Meeting-Dashboard.svg");
        assert_eq!(state.last_output.as_deref(), Some(expected.as_path()));
        assert!(fs::read_to_string(&expected).unwrap().contains("Budget"));
        assert!(state.last_message.starts_with("Exported to"));
    }

    #[test]
    fn test_failure_clears_busy_and_stays_retryable() {
        let temp = TempDir::new().unwrap();
        let mut state = ExportState::new();

        state
            .start_export(
                test_support::snapshot(&["A"]),
                Box::new(FailingRenderer),
                temp.path().to_path_buf(),
            )
            .unwrap();
        wait_until_settled(&mut state);

        assert_eq!(state.status, ExportStatus::Failed);
        assert!(state.last_message.contains("no ink left"));
        assert!(!state.is_busy());

        state
            .start_export(
                test_support::snapshot(&["A"]),
                Box::new(MarkdownRenderer),
                temp.path().to_path_buf(),
            )
            .unwrap();
        wait_until_settled(&mut state);
        assert_eq!(state.status, ExportStatus::Success);
    }

    #[test]
    fn test_panicking_worker_releases_busy_flag() {
        let temp = TempDir::new().unwrap();
        let mut state = ExportState::new();

        state
            .start_export(
                test_support::snapshot(&["A"]),
                Box::new(PanickingRenderer),
                temp.path().to_path_buf(),
            )
            .unwrap();
        wait_until_settled(&mut state);

        assert_eq!(state.status, ExportStatus::Failed);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_export_status_display() {
        assert_eq!(ExportStatus::Idle.to_string(), "Idle");
        assert_eq!(ExportStatus::Exporting.to_string(), "Exporting...");
        assert_eq!(ExportStatus::Failed.to_string(), "✗ Export failed");
    }
}
