//! Backing store abstractions for persistence.
//!
//! This module provides the [StoreBackend] trait and implementations for
//! the places a phone book can be saved to: a text file ([FileBackend]) and
//! an in-memory line buffer ([InMemoryBackend]).

use crate::error::PhonebookError;
use log::trace;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

// =#========================================================================#=
// STORE BACKEND (Trait)
// =#========================================================================#=
/// Trait defining a whole-store line sink and source.
///
/// A backend is read and written as a whole: [write_lines](StoreBackend::write_lines)
/// replaces any previous content, [read_lines](StoreBackend::read_lines)
/// returns all of it. There is no partial-write recovery.
pub trait StoreBackend {
    /// Returns whether the store exists (has been written before).
    fn exists(&self) -> bool;

    /// Reads all lines of the store, without line terminators.
    ///
    /// # Errors
    /// * `StoreMissing` - If the store does not exist
    /// * `IoError` - If reading fails
    fn read_lines(&self) -> Result<Vec<String>, PhonebookError>;

    /// Replaces the content of the store with the given lines.
    ///
    /// # Errors
    /// Returns `IoError` if writing fails.
    fn write_lines(&mut self, lines: &[String]) -> Result<(), PhonebookError>;

    /// Human-readable description of the store, used in messages.
    fn describe(&self) -> String;
}

// =#========================================================================#=
// FILE BACKEND
// =#========================================================================#=
/// A store kept in a plain text file, one record per `\n`-terminated line.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
    create_dirs: bool,
}

impl FileBackend {
    /// Creates a backend for the file at `path`. The file need not exist yet.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileBackend {
            path: path.as_ref().to_path_buf(),
            create_dirs: false,
        }
    }

    /// Sets whether missing parent directories are created on write.
    pub fn set_create_dirs(&mut self, create_dirs: bool) {
        self.create_dirs = create_dirs;
    }

    /// Returns the path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreBackend for FileBackend {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read_lines(&self) -> Result<Vec<String>, PhonebookError> {
        if !self.exists() {
            return Err(PhonebookError::store_missing(&self.path));
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        trace!("Read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), PhonebookError> {
        if self.create_dirs {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        for line in lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }

        writer.flush()?;
        trace!("Wrote {} lines to {}", lines.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// =#========================================================================#=
// IN MEMORY BACKEND
// =#========================================================================#=
/// A store held in memory, e.g. for tests or for staging a save.
///
/// A fresh backend does not exist until it is written to (or created
/// [with lines](InMemoryBackend::with_lines)).
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    lines: Option<Vec<String>>,
}

impl InMemoryBackend {
    /// Creates a backend that does not exist yet.
    pub fn new() -> Self {
        InMemoryBackend { lines: None }
    }

    /// Creates an existing backend holding the given lines.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InMemoryBackend {
            lines: Some(lines.into_iter().map(Into::into).collect()),
        }
    }

    /// Returns the stored lines, or `None` if never written.
    pub fn lines(&self) -> Option<&[String]> {
        self.lines.as_deref()
    }
}

impl StoreBackend for InMemoryBackend {
    fn exists(&self) -> bool {
        self.lines.is_some()
    }

    fn read_lines(&self) -> Result<Vec<String>, PhonebookError> {
        self.lines
            .clone()
            .ok_or_else(|| PhonebookError::store_missing(self.describe()))
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<(), PhonebookError> {
        self.lines = Some(lines.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
