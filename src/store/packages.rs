//! Package collection operations.
//!
//! The `popular` flag is exclusive: marking a package popular clears the flag
//! on every other package, so at most one package is highlighted at a time.

use super::{StudioStore, new_entity_id};
use crate::entities::{NewPackage, Package, PackagePatch};
use std::sync::Arc;
use tracing::debug;

impl StudioStore {
    /// Adds a new service package and returns the stored record.
    ///
    /// If the payload marks the package popular, the flag is cleared on all
    /// existing packages in the same mutation.
    pub async fn add_package(&self, new: NewPackage) -> Package {
        let package = Package {
            id: new_entity_id(),
            name: new.name,
            description: new.description,
            price: new.price,
            duration: new.duration,
            photo_count: new.photo_count,
            features: new.features,
            popular: new.popular,
        };

        let mut state = self.state.write().await;
        let mut packages = state.packages.as_ref().clone();
        if package.popular {
            for existing in &mut packages {
                existing.popular = false;
            }
        }
        packages.push(package.clone());
        state.packages = Arc::new(packages);
        debug!(package_id = %package.id, "Added package.");
        package
    }

    /// Merges `patch` into the package with `id`. No-op if the id is absent.
    ///
    /// A patch setting `popular` to `true` clears the flag on every other
    /// package; the whole exchange is one single-collection mutation.
    pub async fn update_package(&self, id: &str, patch: PackagePatch) {
        let mut state = self.state.write().await;
        let mut packages = state.packages.as_ref().clone();
        let Some(index) = packages.iter().position(|p| p.id == id) else {
            return;
        };

        if patch.popular == Some(true) {
            for existing in &mut packages {
                existing.popular = false;
            }
        }
        if let Some(package) = packages.get_mut(index) {
            patch.apply(package);
        }
        state.packages = Arc::new(packages);
        debug!(package_id = %id, "Updated package.");
    }

    /// Removes the package with `id`, if present.
    ///
    /// No cascade: bookings referencing the package keep their snapshotted
    /// `package_name`.
    pub async fn delete_package(&self, id: &str) {
        let mut state = self.state.write().await;
        if state.packages.iter().any(|p| p.id == id) {
            let packages = state
                .packages
                .iter()
                .filter(|p| p.id != id)
                .cloned()
                .collect();
            state.packages = Arc::new(packages);
            debug!(package_id = %id, "Deleted package.");
        }
    }

    /// Current package collection.
    pub async fn packages(&self) -> Arc<Vec<Package>> {
        Arc::clone(&self.state.read().await.packages)
    }

    /// Looks up a single package by id.
    pub async fn package_by_id(&self, id: &str) -> Option<Package> {
        self.state
            .read()
            .await
            .packages
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }
}
