//! Declarative logical data model
//!
//! Mirrors the subset of the workspace's declarative LDM document that the
//! quality checks read. Unknown keys are ignored and missing lists default
//! to empty, so documents exported with extra sections still load.
//!
//! ```json
//! {
//!   "ldm": {
//!     "datasets": [
//!       {
//!         "id": "customers",
//!         "title": "Customers",
//!         "description": "One row per customer",
//!         "attributes": [{ "id": "customer_name", "title": "Customer Name" }],
//!         "facts": [{ "id": "lifetime_value", "title": "Lifetime Value" }]
//!       }
//!     ]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::NamedItem;

/// Top-level declarative document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarativeModel {
    /// The logical data model
    #[serde(default)]
    pub ldm: DeclarativeLdm,
}

/// Logical data model: the datasets of one workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarativeLdm {
    /// Datasets in declaration order
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

/// A dataset and the attributes and facts it owns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Dataset identifier
    pub id: String,
    /// Dataset title
    #[serde(default)]
    pub title: Option<String>,
    /// Dataset description
    #[serde(default)]
    pub description: Option<String>,
    /// Attributes in declaration order
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Facts in declaration order
    #[serde(default)]
    pub facts: Vec<Fact>,
}

/// A dataset attribute
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Attribute identifier
    pub id: String,
    /// Attribute title
    #[serde(default)]
    pub title: Option<String>,
    /// Attribute description
    #[serde(default)]
    pub description: Option<String>,
}

/// A dataset fact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fact {
    /// Fact identifier
    pub id: String,
    /// Fact title
    #[serde(default)]
    pub title: Option<String>,
    /// Fact description
    #[serde(default)]
    pub description: Option<String>,
}

/// Which kind of LDM object a finding refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A dataset
    Dataset,
    /// An attribute
    Attribute,
    /// A fact
    Fact,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dataset => write!(f, "dataset"),
            Self::Attribute => write!(f, "attribute"),
            Self::Fact => write!(f, "fact"),
        }
    }
}

macro_rules! impl_named_item {
    ($($ty:ty),+) => {
        $(
            impl NamedItem for $ty {
                fn title(&self) -> Option<&str> {
                    self.title.as_deref()
                }

                fn description(&self) -> Option<&str> {
                    self.description.as_deref()
                }
            }
        )+
    };
}

impl_named_item!(Dataset, Attribute, Fact);

impl DeclarativeModel {
    /// Merge several documents into one, keeping dataset order
    #[must_use]
    pub fn merge(models: impl IntoIterator<Item = Self>) -> Self {
        let datasets = models.into_iter().flat_map(|m| m.ldm.datasets).collect();
        Self {
            ldm: DeclarativeLdm { datasets },
        }
    }

    /// Total number of datasets, attributes and facts
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.ldm
            .datasets
            .iter()
            .map(|ds| 1 + ds.attributes.len() + ds.facts.len())
            .sum()
    }
}
