//! Reminder collection operations.
//!
//! The store only bookkeeps reminders; nothing in this system delivers them.

use super::{StudioStore, new_entity_id};
use crate::entities::{NewReminder, Reminder, ReminderPatch};
use std::sync::Arc;
use tracing::debug;

impl StudioStore {
    /// Adds a new reminder and returns the stored record.
    ///
    /// The store generates the id and sets `sent` to `false`.
    pub async fn add_reminder(&self, new: NewReminder) -> Reminder {
        let reminder = Reminder {
            id: new_entity_id(),
            booking_id: new.booking_id,
            client_name: new.client_name,
            kind: new.kind,
            scheduled_for: new.scheduled_for,
            sent: false,
            message: new.message,
        };

        let mut state = self.state.write().await;
        let mut reminders = state.reminders.as_ref().clone();
        reminders.push(reminder.clone());
        state.reminders = Arc::new(reminders);
        debug!(reminder_id = %reminder.id, "Added reminder.");
        reminder
    }

    /// Merges `patch` into the reminder with `id`. No-op if the id is absent.
    pub async fn update_reminder(&self, id: &str, patch: ReminderPatch) {
        let mut state = self.state.write().await;
        let mut reminders = state.reminders.as_ref().clone();
        if let Some(reminder) = reminders.iter_mut().find(|r| r.id == id) {
            patch.apply(reminder);
            state.reminders = Arc::new(reminders);
            debug!(reminder_id = %id, "Updated reminder.");
        }
    }

    /// Removes the reminder with `id`, if present.
    pub async fn delete_reminder(&self, id: &str) {
        let mut state = self.state.write().await;
        if state.reminders.iter().any(|r| r.id == id) {
            let reminders = state
                .reminders
                .iter()
                .filter(|r| r.id != id)
                .cloned()
                .collect();
            state.reminders = Arc::new(reminders);
            debug!(reminder_id = %id, "Deleted reminder.");
        }
    }

    /// Current reminder collection.
    pub async fn reminders(&self) -> Arc<Vec<Reminder>> {
        Arc::clone(&self.state.read().await.reminders)
    }

    /// Looks up a single reminder by id.
    pub async fn reminder_by_id(&self, id: &str) -> Option<Reminder> {
        self.state
            .read()
            .await
            .reminders
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::entities::{NewReminder, ReminderKind, ReminderPatch};
    use crate::test_utils::{fixed_now, setup_test_store};
    use chrono::Duration;

    #[tokio::test]
    async fn test_add_reminder_starts_unsent() {
        let store = setup_test_store();

        let reminder = store
            .add_reminder(NewReminder {
                booking_id: "booking-1".to_string(),
                client_name: "Ann Lee".to_string(),
                kind: ReminderKind::Booking,
                scheduled_for: fixed_now() + Duration::days(1),
                message: "Shoot tomorrow at 2pm".to_string(),
            })
            .await;

        assert!(!reminder.id.is_empty());
        assert!(!reminder.sent);

        let found = store.reminder_by_id(&reminder.id).await.unwrap();
        assert_eq!(found, reminder);
    }

    #[tokio::test]
    async fn test_mark_reminder_sent_via_patch() {
        let store = setup_test_store();
        let reminder = store
            .add_reminder(NewReminder {
                booking_id: "booking-1".to_string(),
                client_name: "Ann Lee".to_string(),
                kind: ReminderKind::Delivery,
                scheduled_for: fixed_now(),
                message: "Gallery is ready".to_string(),
            })
            .await;

        store
            .update_reminder(
                &reminder.id,
                ReminderPatch {
                    sent: Some(true),
                    ..ReminderPatch::default()
                },
            )
            .await;

        assert!(store.reminder_by_id(&reminder.id).await.unwrap().sent);
    }
}
