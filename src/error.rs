//! Error types shared by loading and querying

use std::io;
use std::path::PathBuf;

/// Result type for library operations
pub type FactsResult<T> = Result<T, FactsError>;

/// Errors that can occur while building or querying a library
#[derive(Debug)]
pub enum FactsError {
    /// The facts directory could not be listed
    DirectoryUnreadable { path: PathBuf, source: io::Error },
    /// The facts directory has no entries at all
    EmptyDirectory { path: PathBuf },
    /// A fact file could not be opened
    FileOpen { path: PathBuf, source: io::Error },
    /// A fact file could not be read line by line (I/O or invalid UTF-8)
    FileRead { path: PathBuf, source: io::Error },
    /// No file in the directory produced a usable keyword set
    EmptyFacts { path: PathBuf },
    /// Lookup keyword is shorter than the configured minimum
    InvalidKeyword { keyword: String, min_len: usize },
    /// Search text is empty
    EmptyInput,
    /// Nothing matched the keyword or text
    FactNotFound,
}

/// Fieldless view of [`FactsError`] for matching on the error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactsErrorKind {
    DirectoryUnreadable,
    EmptyDirectory,
    FileOpen,
    FileRead,
    EmptyFacts,
    InvalidKeyword,
    EmptyInput,
    FactNotFound,
}

impl FactsError {
    pub fn kind(&self) -> FactsErrorKind {
        match self {
            FactsError::DirectoryUnreadable { .. } => FactsErrorKind::DirectoryUnreadable,
            FactsError::EmptyDirectory { .. } => FactsErrorKind::EmptyDirectory,
            FactsError::FileOpen { .. } => FactsErrorKind::FileOpen,
            FactsError::FileRead { .. } => FactsErrorKind::FileRead,
            FactsError::EmptyFacts { .. } => FactsErrorKind::EmptyFacts,
            FactsError::InvalidKeyword { .. } => FactsErrorKind::InvalidKeyword,
            FactsError::EmptyInput => FactsErrorKind::EmptyInput,
            FactsError::FactNotFound => FactsErrorKind::FactNotFound,
        }
    }

    /// True for errors raised by `get_fact` / `find_fact`
    pub fn is_query_error(&self) -> bool {
        matches!(
            self.kind(),
            FactsErrorKind::InvalidKeyword | FactsErrorKind::EmptyInput | FactsErrorKind::FactNotFound
        )
    }
}

impl std::fmt::Display for FactsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactsError::DirectoryUnreadable { path, source } => {
                write!(f, "Cannot read directory {}: {}", path.display(), source)
            }
            FactsError::EmptyDirectory { path } => {
                write!(f, "Directory {} is empty", path.display())
            }
            FactsError::FileOpen { path, source } => {
                write!(f, "Error opening file {}: {}", path.display(), source)
            }
            FactsError::FileRead { path, source } => {
                write!(f, "Error reading file {}: {}", path.display(), source)
            }
            FactsError::EmptyFacts { path } => {
                write!(f, "Empty facts list in {}", path.display())
            }
            FactsError::InvalidKeyword { keyword, min_len } => write!(
                f,
                "Keyword {:?} is too short: length must be at least {} characters",
                keyword, min_len
            ),
            FactsError::EmptyInput => write!(f, "Provided text is empty"),
            FactsError::FactNotFound => write!(f, "Fact not found"),
        }
    }
}

impl std::error::Error for FactsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FactsError::DirectoryUnreadable { source, .. }
            | FactsError::FileOpen { source, .. }
            | FactsError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}
