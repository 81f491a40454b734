//! The title/description shape shared by every checked item

use serde::{Deserialize, Serialize};

/// Anything that carries an optional title and an optional description.
///
/// Datasets, attributes and facts are all checked through this trait, so the
/// quality checks never need to know which concrete record they are looking at.
pub trait NamedItem {
    /// The human-facing title, if any
    fn title(&self) -> Option<&str>;

    /// The free-text description, if any
    fn description(&self) -> Option<&str>;
}

impl<T: NamedItem + ?Sized> NamedItem for &T {
    fn title(&self) -> Option<&str> {
        (**self).title()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }
}

/// A standalone named item, for callers that only have titles and descriptions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item title
    #[serde(default)]
    pub title: Option<String>,
    /// Item description
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    /// Create an item with a title and no description
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl NamedItem for Item {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
