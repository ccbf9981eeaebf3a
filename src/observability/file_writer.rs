//! Rotating log file with size-based rotation and backup retention.
//!
//! The TUI owns stdout and stderr while it runs, so log output goes to a file.
//! The file is rotated once it grows past a size threshold, keeping a fixed
//! number of numbered backups (`keyb.log.1` is the newest).

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating log file.
///
/// The file is opened lazily on the first write, so construction never fails.
/// Each write checks the current size and rotates first when needed:
///
/// 1. `keyb.log.2` → `keyb.log.3` (the oldest backup is overwritten)
/// 2. `keyb.log.1` → `keyb.log.2`
/// 3. `keyb.log` → `keyb.log.1`
///
/// # Example
///
/// ```no_run
/// use keyb::observability::LogFile;
/// use std::path::PathBuf;
///
/// let log = LogFile::new(PathBuf::from("/tmp/keyb.log"));
/// log.write_all(b"hello\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct LogFile {
    file_path: PathBuf,
    max_bytes: u64,
    writer: Mutex<Option<fs::File>>,
}

impl LogFile {
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limit(file_path, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a log file rotating at `max_bytes`.
    #[must_use]
    pub const fn with_limit(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            max_bytes,
            writer: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `buf` to the file, rotating beforehand when it is too large.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors or if another thread panicked while
    /// holding the lock.
    pub fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_bytes {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Shifts every backup up by one and moves the current file to `.1`.
    fn rotate_files(&self) -> io::Result<()> {
        for n in (1..MAX_BACKUP_FILES).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, self.backup_path(1))?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for LogFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogFile")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

/// Per-event writer handed out to the `fmt` layer.
#[derive(Debug)]
pub struct LogWriter<'a> {
    file: &'a LogFile,
}

impl Write for LogWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter { file: self }
    }
}
