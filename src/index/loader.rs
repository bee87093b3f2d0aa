//! Fact file discovery

use crate::error::{FactsError, FactsResult};
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Result of listing a facts directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileListing {
    /// Eligible file names, sorted; kept as `OsString` so non-UTF-8 names
    /// still resolve to the file on disk
    pub files: Vec<OsString>,
    /// Total directory entries before filtering
    pub total_entries: usize,
}

/// List candidate fact files directly inside `dir`.
///
/// Subdirectories and files of `max_file_size` bytes or more are left out.
/// An empty directory is an error; a directory whose entries are all
/// filtered out is not.
pub fn list_fact_files(dir: &Path, max_file_size: u64) -> FactsResult<FileListing> {
    let unreadable = |source| FactsError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        entries.push(entry.map_err(unreadable)?);
    }

    if entries.is_empty() {
        return Err(FactsError::EmptyDirectory {
            path: dir.to_path_buf(),
        });
    }

    let total_entries = entries.len();
    let mut files = Vec::with_capacity(total_entries);

    for entry in entries {
        let name = entry.file_name();
        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                debug!(file = ?name, error = %e, "skipping entry without metadata");
                continue;
            }
        };

        if metadata.is_dir() {
            debug!(file = ?name, "skipping directory");
            continue;
        }
        if metadata.len() >= max_file_size {
            debug!(file = ?name, size = metadata.len(), "skipping oversized file");
            continue;
        }

        files.push(name);
    }

    files.sort();

    Ok(FileListing {
        files,
        total_entries,
    })
}
