//! Logging init: file under the XDG state dir, with stderr fallback.

use anyhow::Result;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,rfetch=debug"))
}

/// Open (creating dirs as needed) the append-mode log file at
/// `~/.local/state/rfetch/rfetch.log`.
fn open_log_file() -> Result<(File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rfetch")?;
    let log_dir = xdg_dirs.get_state_home().join("rfetch");
    fs::create_dir_all(&log_dir)?;
    let path = log_dir.join("rfetch.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// `MakeWriter` over a shared log file; if the handle cannot be cloned for a
/// writer, that writer degrades to stderr rather than dropping the event.
struct LogFileWriter(File);

enum FileOrStderr {
    File(File),
    Stderr,
}

impl<'a> MakeWriter<'a> for LogFileWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// Initialize structured logging to the state-dir log file. Returns Err when
/// the file cannot be opened (unwritable state dir) so the caller can fall
/// back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let (file, path) = open_log_file()?;

    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(LogFileWriter(file))
        .with_ansi(false)
        .init();

    tracing::info!("rfetch logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only (no file).
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
