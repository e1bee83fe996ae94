//! Package entity - Represents a bookable service package.
//!
//! At most one package may carry the `popular` flag: the store clears it on
//! every other package whenever an add or update sets it.

use serde::{Deserialize, Serialize};

/// Package data model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Unique identifier, generated at creation
    pub id: String,
    /// Package display name
    pub name: String,
    /// Short marketing description
    pub description: String,
    /// Price in dollars
    pub price: f64,
    /// Session length in minutes
    pub duration: u32,
    /// Number of edited photos included
    pub photo_count: u32,
    /// Ordered list of included features, in display order
    pub features: Vec<String>,
    /// Whether this is the highlighted "most popular" package
    #[serde(default)]
    pub popular: bool,
}

/// Caller-supplied fields for [`crate::store::StudioStore::add_package`].
#[derive(Clone, Debug)]
pub struct NewPackage {
    /// Package display name
    pub name: String,
    /// Short marketing description
    pub description: String,
    /// Price in dollars
    pub price: f64,
    /// Session length in minutes
    pub duration: u32,
    /// Number of edited photos included
    pub photo_count: u32,
    /// Ordered list of included features
    pub features: Vec<String>,
    /// Whether to highlight this package as most popular
    pub popular: bool,
}

/// Shallow field-level patch for [`crate::store::StudioStore::update_package`].
#[derive(Clone, Debug, Default)]
pub struct PackagePatch {
    /// Replacement display name
    pub name: Option<String>,
    /// Replacement description
    pub description: Option<String>,
    /// Replacement price
    pub price: Option<f64>,
    /// Replacement duration in minutes
    pub duration: Option<u32>,
    /// Replacement photo count
    pub photo_count: Option<u32>,
    /// Replacement feature list (whole-list replacement, not a merge)
    pub features: Option<Vec<String>>,
    /// Replacement popular flag; `Some(true)` clears the flag elsewhere
    pub popular: Option<bool>,
}

impl PackagePatch {
    /// Merges the supplied fields into `package`, leaving the rest untouched.
    pub(crate) fn apply(self, package: &mut Package) {
        if let Some(name) = self.name {
            package.name = name;
        }
        if let Some(description) = self.description {
            package.description = description;
        }
        if let Some(price) = self.price {
            package.price = price;
        }
        if let Some(duration) = self.duration {
            package.duration = duration;
        }
        if let Some(photo_count) = self.photo_count {
            package.photo_count = photo_count;
        }
        if let Some(features) = self.features {
            package.features = features;
        }
        if let Some(popular) = self.popular {
            package.popular = popular;
        }
    }
}
