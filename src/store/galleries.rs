//! Gallery collection operations.

use super::{StudioStore, new_entity_id};
use crate::entities::{Gallery, GalleryPatch, NewGallery};
use std::sync::Arc;
use tracing::debug;

impl StudioStore {
    /// Adds a new gallery and returns the stored record.
    ///
    /// The store generates the id and stamps `created_at` from its clock.
    pub async fn add_gallery(&self, new: NewGallery) -> Gallery {
        let gallery = Gallery {
            id: new_entity_id(),
            client_id: new.client_id,
            client_name: new.client_name,
            title: new.title,
            description: new.description,
            cover_image: new.cover_image,
            photo_count: new.photo_count,
            created_at: self.now(),
            delivery_status: new.delivery_status,
            access_link: new.access_link,
        };

        let mut state = self.state.write().await;
        let mut galleries = state.galleries.as_ref().clone();
        galleries.push(gallery.clone());
        state.galleries = Arc::new(galleries);
        debug!(gallery_id = %gallery.id, "Added gallery.");
        gallery
    }

    /// Merges `patch` into the gallery with `id`. No-op if the id is absent.
    pub async fn update_gallery(&self, id: &str, patch: GalleryPatch) {
        let mut state = self.state.write().await;
        let mut galleries = state.galleries.as_ref().clone();
        if let Some(gallery) = galleries.iter_mut().find(|g| g.id == id) {
            patch.apply(gallery);
            state.galleries = Arc::new(galleries);
            debug!(gallery_id = %id, "Updated gallery.");
        }
    }

    /// Removes the gallery with `id`, if present.
    pub async fn delete_gallery(&self, id: &str) {
        let mut state = self.state.write().await;
        if state.galleries.iter().any(|g| g.id == id) {
            let galleries = state
                .galleries
                .iter()
                .filter(|g| g.id != id)
                .cloned()
                .collect();
            state.galleries = Arc::new(galleries);
            debug!(gallery_id = %id, "Deleted gallery.");
        }
    }

    /// Current gallery collection.
    pub async fn galleries(&self) -> Arc<Vec<Gallery>> {
        Arc::clone(&self.state.read().await.galleries)
    }

    /// Looks up a single gallery by id.
    pub async fn gallery_by_id(&self, id: &str) -> Option<Gallery> {
        self.state
            .read()
            .await
            .galleries
            .iter()
            .find(|g| g.id == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::entities::{DeliveryStatus, GalleryPatch};
    use crate::test_utils::{create_test_client, create_test_gallery, fixed_now, setup_test_store};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_add_gallery_generates_fields() {
        let store = setup_test_store();
        let client = create_test_client(&store, "Ann Lee").await;

        let gallery = create_test_gallery(&store, &client, "Spring Portraits").await;

        assert!(!gallery.id.is_empty());
        assert_eq!(gallery.created_at, fixed_now());
        assert_eq!(gallery.delivery_status, DeliveryStatus::Pending);
        assert_eq!(gallery.client_name, "Ann Lee");

        let found = store.gallery_by_id(&gallery.id).await.unwrap();
        assert_eq!(found, gallery);
    }

    #[tokio::test]
    async fn test_update_gallery_delivery_progression() {
        let store = setup_test_store();
        let client = create_test_client(&store, "Ann Lee").await;
        let gallery = create_test_gallery(&store, &client, "Spring Portraits").await;

        store
            .update_gallery(
                &gallery.id,
                GalleryPatch {
                    delivery_status: Some(DeliveryStatus::Delivered),
                    access_link: Some(Some("https://gallery.example.com/spring".to_string())),
                    ..GalleryPatch::default()
                },
            )
            .await;

        let updated = store.gallery_by_id(&gallery.id).await.unwrap();
        assert_eq!(updated.delivery_status, DeliveryStatus::Delivered);
        assert_eq!(
            updated.access_link.as_deref(),
            Some("https://gallery.example.com/spring")
        );
        assert_eq!(updated.title, "Spring Portraits");
    }

    #[tokio::test]
    async fn test_gallery_survives_client_deletion() {
        let store = setup_test_store();
        let client = create_test_client(&store, "Ann Lee").await;
        let gallery = create_test_gallery(&store, &client, "Spring Portraits").await;

        store.delete_client(&client.id).await;

        // No cascade: the gallery now points at a dangling id but its
        // denormalized name is still readable.
        let orphaned = store.gallery_by_id(&gallery.id).await.unwrap();
        assert_eq!(orphaned.client_id, client.id);
        assert_eq!(orphaned.client_name, "Ann Lee");
        assert!(store.client_by_id(&client.id).await.is_none());
    }

    #[tokio::test]
    async fn test_delete_gallery_and_noop_variants() {
        let store = setup_test_store();
        let client = create_test_client(&store, "Ann Lee").await;
        let gallery = create_test_gallery(&store, &client, "Spring Portraits").await;

        store.delete_gallery(&gallery.id).await;
        assert!(store.gallery_by_id(&gallery.id).await.is_none());

        let before = store.galleries().await;
        store.delete_gallery("no-such-id").await;
        store.update_gallery("no-such-id", GalleryPatch::default()).await;
        let after = store.galleries().await;
        assert!(Arc::ptr_eq(&before, &after));
    }
}
