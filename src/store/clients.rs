//! Client collection operations.

use super::{StudioStore, new_entity_id};
use crate::entities::{Client, ClientPatch, NewClient};
use std::sync::Arc;
use tracing::debug;

impl StudioStore {
    /// Adds a new client and returns the stored record.
    ///
    /// The store generates the id, stamps `created_at` from its clock, and
    /// zeroes the `referral_count`/`total_bookings`/`total_spent` counters.
    /// `referred_by` is accepted as supplied; the store does not check that
    /// the referenced client exists.
    pub async fn add_client(&self, new: NewClient) -> Client {
        let client = Client {
            id: new_entity_id(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            avatar: new.avatar,
            referred_by: new.referred_by,
            referral_count: 0,
            total_bookings: 0,
            total_spent: 0.0,
            created_at: self.now(),
            notes: new.notes,
        };

        let mut state = self.state.write().await;
        let mut clients = state.clients.as_ref().clone();
        clients.push(client.clone());
        state.clients = Arc::new(clients);
        debug!(client_id = %client.id, "Added client.");
        client
    }

    /// Merges `patch` into the client with `id`.
    ///
    /// No-op if the id is absent: the collection, including its reference
    /// identity, is left untouched. The id itself is never patched and the
    /// counters are never recomputed - only an explicit patch changes them.
    pub async fn update_client(&self, id: &str, patch: ClientPatch) {
        let mut state = self.state.write().await;
        let mut clients = state.clients.as_ref().clone();
        if let Some(client) = clients.iter_mut().find(|c| c.id == id) {
            patch.apply(client);
            state.clients = Arc::new(clients);
            debug!(client_id = %id, "Updated client.");
        }
    }

    /// Removes the client with `id`, if present.
    ///
    /// No cascade: bookings, galleries, and referrals that reference the id
    /// are left in place and stay readable through their denormalized name
    /// fields.
    pub async fn delete_client(&self, id: &str) {
        let mut state = self.state.write().await;
        if state.clients.iter().any(|c| c.id == id) {
            let clients = state
                .clients
                .iter()
                .filter(|c| c.id != id)
                .cloned()
                .collect();
            state.clients = Arc::new(clients);
            debug!(client_id = %id, "Deleted client.");
        }
    }

    /// Current client collection.
    pub async fn clients(&self) -> Arc<Vec<Client>> {
        Arc::clone(&self.state.read().await.clients)
    }

    /// Looks up a single client by id.
    pub async fn client_by_id(&self, id: &str) -> Option<Client> {
        self.state
            .read()
            .await
            .clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }
}
