//! Description presence checks

use crate::core::models::NamedItem;

/// True when the item has no real description
///
/// A description that repeats the title verbatim does not count.
#[must_use]
pub fn has_no_description<T: NamedItem + ?Sized>(item: &T) -> bool {
    match item.description() {
        None => true,
        Some(description) => item.title() == Some(description),
    }
}

/// Looser variant used for the coverage summary
///
/// Also treats blank descriptions, and descriptions that only differ from the
/// title by surrounding whitespace, as missing.
#[must_use]
pub fn lacks_meaningful_description<T: NamedItem + ?Sized>(item: &T) -> bool {
    let Some(description) = item.description().map(str::trim) else {
        return true;
    };
    description.is_empty() || Some(description) == item.title().map(str::trim)
}
