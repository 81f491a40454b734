//! JSON-based LDM source
//!
//! Reads declarative LDM documents exported from a workspace.
//!
//! - [`loader`] - Load one document, a directory of documents, or stdin

pub mod loader;

pub use loader::{LoadError, find_ldm_files, load_path, load_reader};
