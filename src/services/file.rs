//! Whole-file text I/O for documents.

use crate::models::TextBuffer;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8 text", .0.display())]
    NotUtf8(PathBuf),
    #[error("{} is a directory", .0.display())]
    IsDirectory(PathBuf),
    #[error("no file name given")]
    EmptyPath,
}

impl FileError {
    fn io(path: &Path, source: io::Error) -> Self {
        FileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A file type offered by the open/save prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub label: &'static str,
    pub pattern: &'static str,
}

pub const FILE_FILTERS: &[FileFilter] = &[
    FileFilter {
        label: "All Files",
        pattern: "*.*",
    },
    FileFilter {
        label: "Text Files",
        pattern: "*.txt",
    },
    FileFilter {
        label: "Python Scripts",
        pattern: "*.py",
    },
    FileFilter {
        label: "Markdown Documents",
        pattern: "*.md",
    },
    FileFilter {
        label: "JavaScript Files",
        pattern: "*.js",
    },
    FileFilter {
        label: "HTML Documents",
        pattern: "*.html",
    },
    FileFilter {
        label: "CSS Documents",
        pattern: "*.css",
    },
];

pub const DEFAULT_EXTENSION: &str = "txt";
pub const DEFAULT_FILE_NAME: &str = "Untitled.txt";

impl FileFilter {
    pub fn matches(&self, path: &Path) -> bool {
        match self.pattern.strip_prefix("*.") {
            Some("*") => true,
            Some(ext) => path
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}

/// One-line hint listing the known file types.
pub fn filter_hint() -> String {
    FILE_FILTERS
        .iter()
        .skip(1)
        .map(|f| f.pattern.trim_start_matches('*'))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name of the first specific filter matching `path`.
pub fn file_type_label(path: &Path) -> &'static str {
    FILE_FILTERS
        .iter()
        .skip(1)
        .find(|f| f.matches(path))
        .map(|f| f.label)
        .unwrap_or("All Files")
}

/// Turn user input into a save path, adding the default extension when the
/// name has none.
pub fn resolve_save_path(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FileError::EmptyPath);
    }
    let mut path = expand_home(trimmed);
    if path.extension().is_none() {
        path.set_extension(DEFAULT_EXTENSION);
    }
    Ok(path)
}

/// Turn user input into an open path.
pub fn resolve_open_path(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FileError::EmptyPath);
    }
    Ok(expand_home(trimmed))
}

fn expand_home(input: &str) -> PathBuf {
    match input.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(input),
        },
        None => PathBuf::from(input),
    }
}

pub struct FileService;

impl FileService {
    pub fn read_text(path: &Path) -> Result<String> {
        if path.is_dir() {
            return Err(FileError::IsDirectory(path.to_path_buf()));
        }
        let bytes = std::fs::read(path).map_err(|e| FileError::io(path, e))?;
        String::from_utf8(bytes).map_err(|_| FileError::NotUtf8(path.to_path_buf()))
    }

    pub fn write_buffer(path: &Path, buffer: &TextBuffer) -> Result<()> {
        if path.is_dir() {
            return Err(FileError::IsDirectory(path.to_path_buf()));
        }
        let file = File::create(path).map_err(|e| FileError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        buffer
            .write_to(&mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| FileError::io(path, e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/file.rs"]
mod tests;
