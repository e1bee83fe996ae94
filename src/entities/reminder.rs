//! Reminder entity - Represents a scheduled client notification.
//!
//! Reminders are bookkeeping only: the store holds them and views can report
//! which are due, but nothing in this system ever delivers one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a reminder is about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    /// Upcoming shoot
    Booking,
    /// Gallery delivery
    Delivery,
    /// Post-shoot follow-up
    Followup,
}

/// Reminder data model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique identifier, generated at creation
    pub id: String,
    /// Id of the booking the reminder relates to (never validated by the store)
    pub booking_id: String,
    /// Client display name, snapshotted at creation
    pub client_name: String,
    /// What the reminder is about
    pub kind: ReminderKind,
    /// When the reminder should fire
    pub scheduled_for: DateTime<Utc>,
    /// Whether it was sent; set `false` at creation
    pub sent: bool,
    /// Message body
    pub message: String,
}

/// Caller-supplied fields for [`crate::store::StudioStore::add_reminder`].
///
/// The id is generated and `sent` starts `false`.
#[derive(Clone, Debug)]
pub struct NewReminder {
    /// Id of the related booking
    pub booking_id: String,
    /// Client display name at creation time
    pub client_name: String,
    /// What the reminder is about
    pub kind: ReminderKind,
    /// When the reminder should fire
    pub scheduled_for: DateTime<Utc>,
    /// Message body
    pub message: String,
}

/// Shallow field-level patch for [`crate::store::StudioStore::update_reminder`].
#[derive(Clone, Debug, Default)]
pub struct ReminderPatch {
    /// Replacement booking id
    pub booking_id: Option<String>,
    /// Replacement client display name
    pub client_name: Option<String>,
    /// Replacement kind
    pub kind: Option<ReminderKind>,
    /// Replacement fire time
    pub scheduled_for: Option<DateTime<Utc>>,
    /// Replacement sent flag
    pub sent: Option<bool>,
    /// Replacement message body
    pub message: Option<String>,
}

impl ReminderPatch {
    /// Merges the supplied fields into `reminder`, leaving the rest untouched.
    pub(crate) fn apply(self, reminder: &mut Reminder) {
        if let Some(booking_id) = self.booking_id {
            reminder.booking_id = booking_id;
        }
        if let Some(client_name) = self.client_name {
            reminder.client_name = client_name;
        }
        if let Some(kind) = self.kind {
            reminder.kind = kind;
        }
        if let Some(scheduled_for) = self.scheduled_for {
            reminder.scheduled_for = scheduled_for;
        }
        if let Some(sent) = self.sent {
            reminder.sent = sent;
        }
        if let Some(message) = self.message {
            reminder.message = message;
        }
    }
}
