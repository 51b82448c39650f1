use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::LoggingError;
use crate::extractors::fields::FieldWarning;
use crate::model::movie::MovieRecord;

static LOGGER_ATTACHED: AtomicBool = AtomicBool::new(false);

/// Installs the process logger. Only the first successful call attaches a sink; later calls
/// return early. A failed attempt clears the flag so the caller sees the error again.
pub fn setup_logging(log_file: Option<&Path>) -> Result<(), LoggingError> {
    if LOGGER_ATTACHED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let result = attach_logger(log_file);
    if result.is_err() {
        LOGGER_ATTACHED.store(false, Ordering::SeqCst);
    }
    result
}

fn attach_logger(log_file: Option<&Path>) -> Result<(), LoggingError> {
    let mut builder = env_logger::Builder::new();

    builder.filter(None, log::LevelFilter::Info);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggingError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
    }

    builder.try_init()?;
    Ok(())
}

/// Copies every log line to stderr and to the log file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// Where extraction reports what it saw. Injected into the walker instead of logging
/// through globals directly.
pub trait Diagnostics {
    fn warn(&self, warning: &FieldWarning, record: &MovieRecord);

    fn extracted(&self, record: &MovieRecord) {
        log::info!("Extracted top100 entry: {}", record);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, warning: &FieldWarning, record: &MovieRecord) {
        log::warn!("{} ({})", warning, record);
    }
}

/// Keeps warnings in memory so callers can inspect them after a run.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    warnings: Mutex<Vec<(FieldWarning, MovieRecord)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<(FieldWarning, MovieRecord)> {
        match self.warnings.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn warn(&self, warning: &FieldWarning, record: &MovieRecord) {
        let mut guard = match self.warnings.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push((warning.clone(), record.clone()));
    }

    fn extracted(&self, _record: &MovieRecord) {}
}
