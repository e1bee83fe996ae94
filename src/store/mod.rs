//! In-memory domain store - the single source of truth for all collections.
//!
//! [`StudioStore`] holds the canonical collection for every entity type behind
//! a single [`RwLock`]. Mutations follow copy-on-write: the affected collection
//! is cloned, changed, and swapped in as a fresh [`Arc`], so observers detect
//! change by reference inequality ([`Arc::ptr_eq`]) and a snapshot held across
//! later mutations stays internally consistent. Each mutation touches exactly
//! one collection and runs to completion under the write lock, which preserves
//! the "one mutation completes before the next begins" discipline of the
//! single-threaded original in a multi-threaded host.
//!
//! Mutators never fail: ids that don't resolve make updates and deletes
//! silent no-ops, and cross-entity references are accepted without validation.
//! The caller looks up referenced entities (and copies their display names)
//! before calling `add`.

mod bookings;
mod clients;
mod galleries;
mod packages;
mod referrals;
mod reminders;

use crate::config::FixtureSet;
use crate::entities::{Booking, Client, Gallery, Package, Referral, Reminder};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// A consistent view of every collection, taken under one read lock.
///
/// Cloning is cheap (one `Arc` bump per collection). Two snapshots can be
/// compared collection-by-collection with [`Arc::ptr_eq`] to learn which
/// collections changed in between.
#[derive(Clone, Debug, Default)]
pub struct StoreSnapshot {
    /// All clients, in insertion order
    pub clients: Arc<Vec<Client>>,
    /// All bookings, in insertion order
    pub bookings: Arc<Vec<Booking>>,
    /// All galleries, in insertion order
    pub galleries: Arc<Vec<Gallery>>,
    /// All service packages, in insertion order
    pub packages: Arc<Vec<Package>>,
    /// All referrals, in insertion order
    pub referrals: Arc<Vec<Referral>>,
    /// All reminders, in insertion order
    pub reminders: Arc<Vec<Reminder>>,
}

/// The domain store.
///
/// An explicit context object rather than a process-wide singleton:
/// constructed once at startup and passed by reference into every consumer,
/// so tests can build as many independent instances as they need.
pub struct StudioStore {
    state: RwLock<StoreSnapshot>,
    clock: fn() -> DateTime<Utc>,
}

impl Default for StudioStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StudioStore {
    /// Creates an empty store using the system clock for creation timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Creates an empty store with an injected clock.
    ///
    /// Creation-time fields ([`Client::created_at`], [`Gallery::created_at`],
    /// [`Referral::date`]) are stamped from `clock` rather than read from a
    /// global time source, which keeps store behavior deterministic in tests.
    #[must_use]
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self {
            state: RwLock::new(StoreSnapshot::default()),
            clock,
        }
    }

    /// Creates a store pre-populated with fixture data.
    ///
    /// Fixture entities are installed verbatim: their ids, timestamps, and
    /// cross-references are trusted as supplied, the same way the studio's
    /// sample data ships with literal ids.
    #[must_use]
    pub fn with_fixtures(fixtures: FixtureSet) -> Self {
        info!(
            clients = fixtures.clients.len(),
            bookings = fixtures.bookings.len(),
            galleries = fixtures.galleries.len(),
            packages = fixtures.packages.len(),
            referrals = fixtures.referrals.len(),
            reminders = fixtures.reminders.len(),
            "Seeding store from fixtures."
        );
        Self {
            state: RwLock::new(StoreSnapshot {
                clients: Arc::new(fixtures.clients),
                bookings: Arc::new(fixtures.bookings),
                galleries: Arc::new(fixtures.galleries),
                packages: Arc::new(fixtures.packages),
                referrals: Arc::new(fixtures.referrals),
                reminders: Arc::new(fixtures.reminders),
            }),
            clock: Utc::now,
        }
    }

    /// Takes a consistent snapshot of all collections under one read lock.
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.clone()
    }

    /// Current instant according to the store's clock.
    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}

/// Generates a fresh collision-free entity id.
fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}
