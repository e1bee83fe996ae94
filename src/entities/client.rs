//! Client entity - Represents a studio customer and their relationship history.
//!
//! Clients carry three derived-but-stored counters (`referral_count`,
//! `total_bookings`, `total_spent`). The store zeroes them at creation and
//! never recomputes them from the booking or referral collections; they change
//! only through an explicit patch. [`crate::core::roster::client_activity`]
//! recomputes the true values when a caller needs to reconcile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client data model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier, generated at creation
    pub id: String,
    /// Full display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Optional avatar image URL
    pub avatar: Option<String>,
    /// Id of the client who referred this one, if any
    pub referred_by: Option<String>,
    /// Referrals credited to this client (caller-maintained, zeroed at creation)
    pub referral_count: u32,
    /// Bookings credited to this client (caller-maintained, zeroed at creation)
    pub total_bookings: u32,
    /// Total dollars spent (caller-maintained, zeroed at creation)
    pub total_spent: f64,
    /// When the client record was created
    pub created_at: DateTime<Utc>,
    /// Free-form notes, e.g. shoot preferences
    pub notes: Option<String>,
}

/// Caller-supplied fields for [`crate::store::StudioStore::add_client`].
///
/// The id, creation timestamp, and the three counters are generated by the
/// store. `referred_by` is accepted as supplied and never validated.
#[derive(Clone, Debug)]
pub struct NewClient {
    /// Full display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Optional avatar image URL
    pub avatar: Option<String>,
    /// Id of the referring client, if any
    pub referred_by: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Shallow field-level patch for [`crate::store::StudioStore::update_client`].
///
/// `None` leaves a field untouched. For fields that are themselves optional,
/// `Some(None)` clears the stored value. The id is never patchable, and the
/// counters are only ever changed here - the store does not recompute them.
#[derive(Clone, Debug, Default)]
pub struct ClientPatch {
    /// Replacement display name
    pub name: Option<String>,
    /// Replacement email address
    pub email: Option<String>,
    /// Replacement phone number
    pub phone: Option<String>,
    /// Replacement avatar URL; `Some(None)` clears it
    pub avatar: Option<Option<String>>,
    /// Replacement referrer id; `Some(None)` clears it
    pub referred_by: Option<Option<String>>,
    /// Replacement referral counter
    pub referral_count: Option<u32>,
    /// Replacement booking counter
    pub total_bookings: Option<u32>,
    /// Replacement spend counter
    pub total_spent: Option<f64>,
    /// Replacement notes; `Some(None)` clears them
    pub notes: Option<Option<String>>,
}

impl ClientPatch {
    /// Merges the supplied fields into `client`, leaving the rest untouched.
    pub(crate) fn apply(self, client: &mut Client) {
        if let Some(name) = self.name {
            client.name = name;
        }
        if let Some(email) = self.email {
            client.email = email;
        }
        if let Some(phone) = self.phone {
            client.phone = phone;
        }
        if let Some(avatar) = self.avatar {
            client.avatar = avatar;
        }
        if let Some(referred_by) = self.referred_by {
            client.referred_by = referred_by;
        }
        if let Some(referral_count) = self.referral_count {
            client.referral_count = referral_count;
        }
        if let Some(total_bookings) = self.total_bookings {
            client.total_bookings = total_bookings;
        }
        if let Some(total_spent) = self.total_spent {
            client.total_spent = total_spent;
        }
        if let Some(notes) = self.notes {
            client.notes = notes;
        }
    }
}
