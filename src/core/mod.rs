//! Core domain logic for ldmlint
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`NamedItem`, verdicts, the declarative LDM)
//! - `services/` - The quality checks and the LDM analyzer

pub mod models;
pub mod services;
