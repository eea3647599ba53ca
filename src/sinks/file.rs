//! File sink

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends log lines to a file.
///
/// Writes go straight to the file without a userspace buffer so each record
/// reaches the OS in one `write` call. With the `file` feature the file is
/// also locked exclusively for as long as the sink lives, which keeps two
/// processes from interleaving lines in the same log.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        #[cfg(feature = "file")]
        {
            use fs2::FileExt;
            file.try_lock_exclusive()
                .map_err(|_| LoggerError::file_lock(path.display().to_string()))?;
        }

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::Sink;
    use tempfile::TempDir;

    #[test]
    fn test_appends_to_existing_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("app.log");
        std::fs::write(&path, b"existing\n").expect("seed file");

        {
            let mut sink = FileSink::open(&path).expect("open sink");
            assert_eq!(sink.write_record(b"appended\n").expect("write"), 9);
        }

        let content = std::fs::read_to_string(&path).expect("read log");
        assert_eq!(content, "existing\nappended\n");
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = TempDir::new().expect("temp dir");
        let err = FileSink::open(dir.path().join("missing").join("app.log")).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }

    #[cfg(feature = "file")]
    #[test]
    fn test_second_open_is_locked_out() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("locked.log");
        let _first = FileSink::open(&path).expect("open sink");
        let err = FileSink::open(&path).unwrap_err();
        assert!(matches!(err, LoggerError::FileLock { .. }));
    }
}
