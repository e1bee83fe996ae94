//! Booking collection operations.

use super::{StudioStore, new_entity_id};
use crate::entities::{Booking, BookingPatch, NewBooking};
use std::sync::Arc;
use tracing::debug;

impl StudioStore {
    /// Adds a new booking and returns the stored record.
    ///
    /// The store generates the id and sets `reminder_sent` to `false`. The
    /// client/package ids and display names are copied verbatim from the
    /// payload - the caller looked them up, the store does not.
    pub async fn add_booking(&self, new: NewBooking) -> Booking {
        let booking = Booking {
            id: new_entity_id(),
            client_id: new.client_id,
            client_name: new.client_name,
            package_id: new.package_id,
            package_name: new.package_name,
            date: new.date,
            location: new.location,
            status: new.status,
            duration: new.duration,
            price: new.price,
            notes: new.notes,
            reminder_sent: false,
        };

        let mut state = self.state.write().await;
        let mut bookings = state.bookings.as_ref().clone();
        bookings.push(booking.clone());
        state.bookings = Arc::new(bookings);
        debug!(booking_id = %booking.id, "Added booking.");
        booking
    }

    /// Merges `patch` into the booking with `id`. No-op if the id is absent.
    pub async fn update_booking(&self, id: &str, patch: BookingPatch) {
        let mut state = self.state.write().await;
        let mut bookings = state.bookings.as_ref().clone();
        if let Some(booking) = bookings.iter_mut().find(|b| b.id == id) {
            patch.apply(booking);
            state.bookings = Arc::new(bookings);
            debug!(booking_id = %id, "Updated booking.");
        }
    }

    /// Removes the booking with `id`, if present.
    pub async fn delete_booking(&self, id: &str) {
        let mut state = self.state.write().await;
        if state.bookings.iter().any(|b| b.id == id) {
            let bookings = state
                .bookings
                .iter()
                .filter(|b| b.id != id)
                .cloned()
                .collect();
            state.bookings = Arc::new(bookings);
            debug!(booking_id = %id, "Deleted booking.");
        }
    }

    /// Current booking collection.
    pub async fn bookings(&self) -> Arc<Vec<Booking>> {
        Arc::clone(&self.state.read().await.bookings)
    }

    /// Looks up a single booking by id.
    pub async fn booking_by_id(&self, id: &str) -> Option<Booking> {
        self.state
            .read()
            .await
            .bookings
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }
}
