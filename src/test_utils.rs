//! Shared test utilities for `ShutterDesk`.
//!
//! This module provides common helper functions for building deterministic
//! stores and creating test entities with sensible defaults.

use crate::entities::{
    Booking, BookingStatus, Client, ClientPatch, DeliveryStatus, Gallery, NewBooking, NewClient,
    NewGallery, NewPackage, NewReferral, Package, Referral, ReferralStatus,
};
use crate::store::StudioStore;
use chrono::{DateTime, TimeZone, Utc};

/// Fixed instant used as "now" in deterministic tests: 2024-06-01 12:00 UTC.
#[allow(clippy::unwrap_used)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Creates an empty store whose clock always returns [`fixed_now`].
/// This is the standard setup for store and view tests.
pub fn setup_test_store() -> StudioStore {
    StudioStore::with_clock(fixed_now)
}

/// Creates a test client with sensible defaults.
///
/// # Defaults
/// * `email`: derived from the name (`"Ann Lee"` -> `ann.lee@example.com`)
/// * `phone`: `"(555) 000-0000"`
/// * no avatar, referrer, or notes
pub async fn create_test_client(store: &StudioStore, name: &str) -> Client {
    store
        .add_client(NewClient {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "(555) 000-0000".to_string(),
            avatar: None,
            referred_by: None,
            notes: None,
        })
        .await
}

/// Creates a test client and patches its `total_spent` counter.
/// Use this when ranking tests need clients with known spend values.
pub async fn create_client_with_spend(store: &StudioStore, name: &str, total_spent: f64) -> Client {
    let client = create_test_client(store, name).await;
    store
        .update_client(
            &client.id,
            ClientPatch {
                total_spent: Some(total_spent),
                ..ClientPatch::default()
            },
        )
        .await;
    client
}

/// Creates a test package with sensible defaults.
///
/// # Defaults
/// * `duration`: 120 minutes
/// * `photo_count`: 50
/// * `popular`: false
pub async fn create_test_package(store: &StudioStore, name: &str, price: f64) -> Package {
    create_custom_package(store, name, price, 120, false).await
}

/// Creates a test package with custom duration and popular flag.
pub async fn create_custom_package(
    store: &StudioStore,
    name: &str,
    price: f64,
    duration: u32,
    popular: bool,
) -> Package {
    store
        .add_package(NewPackage {
            name: name.to_string(),
            description: format!("{name} session"),
            price,
            duration,
            photo_count: 50,
            features: vec!["Online gallery".to_string(), "Print release".to_string()],
            popular,
        })
        .await
}

/// Creates a scheduled test booking for the given client and package,
/// copying their display names the way the presentation layer would.
pub async fn create_test_booking(
    store: &StudioStore,
    client: &Client,
    package: &Package,
    price: f64,
    date: DateTime<Utc>,
) -> Booking {
    store
        .add_booking(NewBooking {
            client_id: client.id.clone(),
            client_name: client.name.clone(),
            package_id: package.id.clone(),
            package_name: package.name.clone(),
            date,
            location: "Studio A".to_string(),
            status: BookingStatus::Scheduled,
            duration: package.duration,
            price,
            notes: None,
        })
        .await
}

/// Creates a pending test gallery for the given client.
pub async fn create_test_gallery(store: &StudioStore, client: &Client, title: &str) -> Gallery {
    store
        .add_gallery(NewGallery {
            client_id: client.id.clone(),
            client_name: client.name.clone(),
            title: title.to_string(),
            description: None,
            cover_image: "https://example.com/cover.jpg".to_string(),
            photo_count: 40,
            delivery_status: DeliveryStatus::Pending,
            access_link: None,
        })
        .await
}

/// Creates a test referral credited to the given referrer.
///
/// # Defaults
/// * `referred_client_name`: `"Sarah Johnson"`
/// * no referred-client id, no value
pub async fn create_test_referral(
    store: &StudioStore,
    referrer: &Client,
    status: ReferralStatus,
) -> Referral {
    store
        .add_referral(NewReferral {
            referrer_id: referrer.id.clone(),
            referrer_name: referrer.name.clone(),
            referred_client_id: None,
            referred_client_name: Some("Sarah Johnson".to_string()),
            status,
            value: None,
        })
        .await
}
