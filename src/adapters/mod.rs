//! Adapter implementations that handle I/O
//!
//! - `json/` - Declarative LDM document loading
pub mod json;
