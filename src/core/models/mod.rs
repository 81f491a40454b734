//! Domain models for ldmlint
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`NamedItem`] - Anything with a title and a description
//! - [`ObfuscatedTitle`] - Verdict of the obfuscated-title detector
//! - [`SimilarPair`] - Two near-duplicate titles
//! - [`DeclarativeModel`] - The declarative LDM document

mod ldm;
mod named_item;
mod verdict;

pub use ldm::{Attribute, Dataset, DeclarativeLdm, DeclarativeModel, Fact, ItemKind};
pub use named_item::{Item, NamedItem};
pub use verdict::{ObfuscatedTitle, SimilarPair};
