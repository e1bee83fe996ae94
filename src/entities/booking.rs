//! Booking entity - Represents a scheduled, completed, or cancelled shoot.
//!
//! Bookings reference a client and a package by id and carry denormalized
//! copies of their display names. The copies are snapshots taken by the caller
//! at creation time; nothing keeps them in sync if the client or package is
//! later renamed, and they stay readable even after the referenced entity is
//! deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// On the calendar, not yet shot
    Scheduled,
    /// Shoot has happened
    Completed,
    /// Called off; the record is kept
    Cancelled,
}

/// Booking data model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier, generated at creation
    pub id: String,
    /// Id of the booked client (never validated by the store)
    pub client_id: String,
    /// Client display name, snapshotted at creation
    pub client_name: String,
    /// Id of the booked service package (never validated by the store)
    pub package_id: String,
    /// Package display name, snapshotted at creation
    pub package_name: String,
    /// When the shoot takes place
    pub date: DateTime<Utc>,
    /// Where the shoot takes place
    pub location: String,
    /// Current lifecycle status
    pub status: BookingStatus,
    /// Session length in minutes
    pub duration: u32,
    /// Agreed price in dollars
    pub price: f64,
    /// Free-form notes
    pub notes: Option<String>,
    /// Whether a reminder was sent; set `false` at creation, never
    /// transitioned by the store itself
    pub reminder_sent: bool,
}

/// Caller-supplied fields for [`crate::store::StudioStore::add_booking`].
///
/// The caller is responsible for looking up the client and package and
/// supplying their ids and display names; the store copies them verbatim.
#[derive(Clone, Debug)]
pub struct NewBooking {
    /// Id of the booked client
    pub client_id: String,
    /// Client display name at booking time
    pub client_name: String,
    /// Id of the booked package
    pub package_id: String,
    /// Package display name at booking time
    pub package_name: String,
    /// When the shoot takes place
    pub date: DateTime<Utc>,
    /// Where the shoot takes place
    pub location: String,
    /// Initial lifecycle status
    pub status: BookingStatus,
    /// Session length in minutes
    pub duration: u32,
    /// Agreed price in dollars
    pub price: f64,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Shallow field-level patch for [`crate::store::StudioStore::update_booking`].
#[derive(Clone, Debug, Default)]
pub struct BookingPatch {
    /// Replacement client id
    pub client_id: Option<String>,
    /// Replacement client display name
    pub client_name: Option<String>,
    /// Replacement package id
    pub package_id: Option<String>,
    /// Replacement package display name
    pub package_name: Option<String>,
    /// Replacement shoot date
    pub date: Option<DateTime<Utc>>,
    /// Replacement location
    pub location: Option<String>,
    /// Replacement lifecycle status
    pub status: Option<BookingStatus>,
    /// Replacement duration in minutes
    pub duration: Option<u32>,
    /// Replacement price
    pub price: Option<f64>,
    /// Replacement notes; `Some(None)` clears them
    pub notes: Option<Option<String>>,
    /// Replacement reminder flag
    pub reminder_sent: Option<bool>,
}

impl BookingPatch {
    /// Merges the supplied fields into `booking`, leaving the rest untouched.
    pub(crate) fn apply(self, booking: &mut Booking) {
        if let Some(client_id) = self.client_id {
            booking.client_id = client_id;
        }
        if let Some(client_name) = self.client_name {
            booking.client_name = client_name;
        }
        if let Some(package_id) = self.package_id {
            booking.package_id = package_id;
        }
        if let Some(package_name) = self.package_name {
            booking.package_name = package_name;
        }
        if let Some(date) = self.date {
            booking.date = date;
        }
        if let Some(location) = self.location {
            booking.location = location;
        }
        if let Some(status) = self.status {
            booking.status = status;
        }
        if let Some(duration) = self.duration {
            booking.duration = duration;
        }
        if let Some(price) = self.price {
            booking.price = price;
        }
        if let Some(notes) = self.notes {
            booking.notes = notes;
        }
        if let Some(reminder_sent) = self.reminder_sent {
            booking.reminder_sent = reminder_sent;
        }
    }
}
