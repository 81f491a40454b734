//! Loader for declarative LDM JSON documents

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::models::DeclarativeModel;

/// Errors that can occur while loading an LDM document
#[derive(Debug, Error)]
pub enum LoadError {
    /// Path does not exist
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// Directory contains no `.json` files
    #[error("no LDM documents (*.json) found in {0}")]
    NoDocuments(PathBuf),

    /// IO error while reading
    #[error("io error reading {path}: {source}")]
    Io {
        /// The file being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Document is not a valid declarative LDM
    #[error("invalid LDM document {path}: {source}")]
    Parse {
        /// The file being parsed
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// Error walking a directory tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

/// Load a model from a file or directory
///
/// A directory is searched recursively for `*.json` files, which are loaded
/// in path order and merged into one model.
pub fn load_path(path: &Path) -> Result<DeclarativeModel, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    if path.is_dir() {
        let files = find_ldm_files(path)?;
        if files.is_empty() {
            return Err(LoadError::NoDocuments(path.to_path_buf()));
        }
        info!("Loading {} LDM document(s) from {}", files.len(), path.display());
        let models = files.iter().map(|f| load_file(f)).collect::<Result<Vec<_>, _>>()?;
        return Ok(DeclarativeModel::merge(models));
    }

    load_file(path)
}

/// Load a model from any reader, e.g. stdin
///
/// `label` names the source in error messages.
pub fn load_reader(reader: impl Read, label: &str) -> Result<DeclarativeModel, LoadError> {
    serde_json::from_reader(reader).map_err(|source| LoadError::Parse {
        path: PathBuf::from(label),
        source,
    })
}

/// All `*.json` files below `dir`, sorted by path
pub fn find_ldm_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn load_file(path: &Path) -> Result<DeclarativeModel, LoadError> {
    debug!("Reading LDM document {}", path.display());
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
