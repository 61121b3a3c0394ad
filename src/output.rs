//! Output management module
//!
//! Handles writing generated words to the output file with buffering.

use crate::error::{MorphError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default output file name
pub const DEFAULT_OUTPUT_NAME: &str = "morph.txt";

/// Default buffer size for file writing (1MB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// Output file writer with buffering
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create (or truncate) the output file, creating parent directories as needed
    pub fn new(path: PathBuf, buffer_size: usize) -> Result<Self> {
        if let Some(parent) = path.parent() {
            ensure_output_dir(parent)?;
        }

        let file = match OpenOptions::new().write(true).create(true).truncate(true).open(&path) {
            Ok(file) => file,
            Err(source) => return Err(MorphError::Output { path, source }),
        };

        log::debug!("Opened {:?} with a {} byte buffer", path, buffer_size);

        Ok(Self {
            writer: BufWriter::with_capacity(buffer_size, file),
            path,
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Write a line to the output
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        if let Err(source) = self.writer.write_all(line.as_bytes()).and_then(|_| self.writer.write_all(b"\n")) {
            return Err(self.output_error(source));
        }
        self.lines_written += 1;
        self.bytes_written += line.len() as u64 + 1; // +1 for newline
        Ok(())
    }

    /// Flush the buffer to disk
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|source| self.output_error(source))
    }

    fn output_error(&self, source: std::io::Error) -> MorphError {
        MorphError::Output {
            path: self.path.clone(),
            source,
        }
    }

    /// Get the output path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get number of lines written
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Get bytes written
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Ensure output directory exists
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        std::fs::create_dir_all(path).map_err(|source| MorphError::Output {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_writer() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");

        let mut writer = OutputWriter::new(path.clone(), 1024).unwrap();
        writer.write_line("hello").unwrap();
        writer.write_line("world").unwrap();
        writer.flush().unwrap();

        assert_eq!(writer.lines_written(), 2);
        assert_eq!(writer.bytes_written(), 12);
        assert_eq!(writer.path(), path.as_path());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "hello\nworld\n");
    }

    #[test]
    fn test_flushes_on_drop() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dropped.txt");

        {
            let mut writer = OutputWriter::new(path.clone(), 1024).unwrap();
            writer.write_line("pässwörd").unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "pässwörd\n");
    }

    #[test]
    fn test_truncates_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("old.txt");
        std::fs::write(&path, "stale\nlines\n").unwrap();

        let mut writer = OutputWriter::new(path.clone(), 16).unwrap();
        writer.write_line("fresh").unwrap();
        writer.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("out.txt");

        let mut writer = OutputWriter::new(path.clone(), 1024).unwrap();
        writer.write_line("x").unwrap();
        drop(writer);

        assert!(path.exists());
    }

    #[test]
    fn test_open_failure_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_path_buf();

        match OutputWriter::new(path.clone(), 1024) {
            Err(MorphError::Output { path: failed, .. }) => assert_eq!(failed, path),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("opening a directory as a file should fail"),
        }
    }
}
