//! Fixture data loading - the sample entities that seed a fresh store.
//!
//! The built-in set mirrors the studio's shipped sample data: three service
//! packages, two clients, two galleries, one booking, and one referral. A TOML
//! file with the same shape (dates as RFC 3339 strings) can replace it via
//! `SHUTTERDESK_FIXTURES`. Fixture entities carry literal ids and the store
//! installs them verbatim, so cross-references inside a fixture file are the
//! author's responsibility.

use crate::entities::{
    Booking, BookingStatus, Client, DeliveryStatus, Gallery, Package, Referral, ReferralStatus,
    Reminder,
};
use crate::errors::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use std::path::Path;

/// The full set of seed entities installed into a fresh store.
///
/// Every collection defaults to empty, so a fixture file only needs the
/// tables it cares about.
#[derive(Debug, Default, Deserialize)]
pub struct FixtureSet {
    /// Clients to seed
    #[serde(default)]
    pub clients: Vec<Client>,
    /// Bookings to seed
    #[serde(default)]
    pub bookings: Vec<Booking>,
    /// Galleries to seed
    #[serde(default)]
    pub galleries: Vec<Gallery>,
    /// Service packages to seed
    #[serde(default)]
    pub packages: Vec<Package>,
    /// Referrals to seed
    #[serde(default)]
    pub referrals: Vec<Referral>,
    /// Reminders to seed
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

/// Loads a fixture set from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_fixtures<P: AsRef<Path>>(path: P) -> Result<FixtureSet> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read fixture file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse fixture TOML: {e}"),
    })
}

// Literal sample dates are always in range.
#[allow(clippy::unwrap_used)]
fn sample_date(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// The built-in sample data set.
///
/// Ids are short literals ("1", "2", ...) unique within each collection; the
/// sample booking references client "1" and package "2".
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn default_fixtures() -> FixtureSet {
    let packages = vec![
        Package {
            id: "1".to_string(),
            name: "Essential".to_string(),
            description: "Perfect for quick sessions and portraits".to_string(),
            price: 299.0,
            duration: 60,
            photo_count: 20,
            features: vec![
                "1 hour session".to_string(),
                "20 edited photos".to_string(),
                "Online gallery".to_string(),
                "Print release".to_string(),
            ],
            popular: false,
        },
        Package {
            id: "2".to_string(),
            name: "Professional".to_string(),
            description: "Ideal for events and special occasions".to_string(),
            price: 599.0,
            duration: 120,
            photo_count: 50,
            features: vec![
                "2 hour session".to_string(),
                "50 edited photos".to_string(),
                "Online gallery".to_string(),
                "Print release".to_string(),
                "2 locations".to_string(),
                "Outfit changes".to_string(),
            ],
            popular: true,
        },
        Package {
            id: "3".to_string(),
            name: "Premium".to_string(),
            description: "Complete coverage for your important moments".to_string(),
            price: 999.0,
            duration: 240,
            photo_count: 100,
            features: vec![
                "4 hour session".to_string(),
                "100 edited photos".to_string(),
                "Premium online gallery".to_string(),
                "Print release".to_string(),
                "Multiple locations".to_string(),
                "Unlimited outfit changes".to_string(),
                "Same-day preview".to_string(),
            ],
            popular: false,
        },
    ];

    let clients = vec![
        Client {
            id: "1".to_string(),
            name: "Emma Watson".to_string(),
            email: "emma.watson@email.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            avatar: Some(
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop"
                    .to_string(),
            ),
            referred_by: None,
            referral_count: 2,
            total_bookings: 3,
            total_spent: 1797.0,
            created_at: sample_date(2024, 1, 15, 0, 0),
            notes: Some("Loves outdoor sessions, prefers golden hour lighting".to_string()),
        },
        Client {
            id: "2".to_string(),
            name: "James Rodriguez".to_string(),
            email: "james.r@email.com".to_string(),
            phone: "(555) 234-5678".to_string(),
            avatar: None,
            referred_by: None,
            referral_count: 0,
            total_bookings: 1,
            total_spent: 599.0,
            created_at: sample_date(2024, 2, 20, 0, 0),
            notes: None,
        },
    ];

    let galleries = vec![
        Gallery {
            id: "1".to_string(),
            client_id: "1".to_string(),
            client_name: "Emma Watson".to_string(),
            title: "Spring Portrait Session".to_string(),
            description: Some("Beautiful outdoor spring portraits".to_string()),
            cover_image: "https://images.unsplash.com/photo-1522621032211-ac0031dfbddc?w=800"
                .to_string(),
            photo_count: 45,
            created_at: sample_date(2024, 3, 10, 0, 0),
            delivery_status: DeliveryStatus::Delivered,
            access_link: Some("https://gallery.example.com/spring-emma".to_string()),
        },
        Gallery {
            id: "2".to_string(),
            client_id: "2".to_string(),
            client_name: "James Rodriguez".to_string(),
            title: "Family Session".to_string(),
            description: Some("Annual family photos".to_string()),
            cover_image: "https://images.unsplash.com/photo-1511895426328-dc8714191300?w=800"
                .to_string(),
            photo_count: 30,
            created_at: sample_date(2024, 3, 15, 0, 0),
            delivery_status: DeliveryStatus::Processing,
            access_link: None,
        },
    ];

    let bookings = vec![Booking {
        id: "1".to_string(),
        client_id: "1".to_string(),
        client_name: "Emma Watson".to_string(),
        package_id: "2".to_string(),
        package_name: "Professional".to_string(),
        date: sample_date(2024, 4, 15, 14, 0),
        location: "Central Park, New York".to_string(),
        status: BookingStatus::Scheduled,
        duration: 120,
        price: 599.0,
        notes: Some("Client prefers sunset timing".to_string()),
        reminder_sent: false,
    }];

    let referrals = vec![Referral {
        id: "1".to_string(),
        referrer_id: "1".to_string(),
        referrer_name: "Emma Watson".to_string(),
        referred_client_id: None,
        referred_client_name: Some("Sarah Johnson".to_string()),
        status: ReferralStatus::Converted,
        date: sample_date(2024, 2, 1, 0, 0),
        value: Some(599.0),
    }];

    FixtureSet {
        clients,
        bookings,
        galleries,
        packages,
        referrals,
        reminders: Vec::new(),
    }
}
