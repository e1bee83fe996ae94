//! Gallery entity - Represents a delivered or in-progress photo gallery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delivery pipeline status of a gallery
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// Not started
    Pending,
    /// Editing or upload in progress
    Processing,
    /// Delivered to the client
    Delivered,
}

/// Gallery data model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    /// Unique identifier, generated at creation
    pub id: String,
    /// Id of the owning client (never validated by the store)
    pub client_id: String,
    /// Client display name, snapshotted at creation
    pub client_name: String,
    /// Gallery title
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Cover image URL
    pub cover_image: String,
    /// Number of photos in the gallery
    pub photo_count: u32,
    /// When the gallery record was created
    pub created_at: DateTime<Utc>,
    /// Current delivery pipeline status
    pub delivery_status: DeliveryStatus,
    /// Client-facing access link, once one exists
    pub access_link: Option<String>,
}

/// Caller-supplied fields for [`crate::store::StudioStore::add_gallery`].
#[derive(Clone, Debug)]
pub struct NewGallery {
    /// Id of the owning client
    pub client_id: String,
    /// Client display name at creation time
    pub client_name: String,
    /// Gallery title
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Cover image URL
    pub cover_image: String,
    /// Number of photos in the gallery
    pub photo_count: u32,
    /// Initial delivery pipeline status
    pub delivery_status: DeliveryStatus,
    /// Client-facing access link, if already known
    pub access_link: Option<String>,
}

/// Shallow field-level patch for [`crate::store::StudioStore::update_gallery`].
#[derive(Clone, Debug, Default)]
pub struct GalleryPatch {
    /// Replacement client id
    pub client_id: Option<String>,
    /// Replacement client display name
    pub client_name: Option<String>,
    /// Replacement title
    pub title: Option<String>,
    /// Replacement description; `Some(None)` clears it
    pub description: Option<Option<String>>,
    /// Replacement cover image URL
    pub cover_image: Option<String>,
    /// Replacement photo count
    pub photo_count: Option<u32>,
    /// Replacement delivery status
    pub delivery_status: Option<DeliveryStatus>,
    /// Replacement access link; `Some(None)` clears it
    pub access_link: Option<Option<String>>,
}

impl GalleryPatch {
    /// Merges the supplied fields into `gallery`, leaving the rest untouched.
    pub(crate) fn apply(self, gallery: &mut Gallery) {
        if let Some(client_id) = self.client_id {
            gallery.client_id = client_id;
        }
        if let Some(client_name) = self.client_name {
            gallery.client_name = client_name;
        }
        if let Some(title) = self.title {
            gallery.title = title;
        }
        if let Some(description) = self.description {
            gallery.description = description;
        }
        if let Some(cover_image) = self.cover_image {
            gallery.cover_image = cover_image;
        }
        if let Some(photo_count) = self.photo_count {
            gallery.photo_count = photo_count;
        }
        if let Some(delivery_status) = self.delivery_status {
            gallery.delivery_status = delivery_status;
        }
        if let Some(access_link) = self.access_link {
            gallery.access_link = access_link;
        }
    }
}
