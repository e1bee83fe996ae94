//! Dashboard aggregate computations.
//!
//! These are the numbers behind the dashboard's stat tiles and lists: total
//! revenue, upcoming shoots, galleries still owed to clients, and the
//! highest-spending clients. Everything is recomputed from the collections on
//! every call.

use crate::entities::{Booking, BookingStatus, Client, DeliveryStatus, Gallery, Reminder};
use crate::store::StoreSnapshot;
use chrono::{DateTime, Utc};

/// Controls which bookings count toward revenue totals.
///
/// The dashboard historically counts every booking, cancelled ones included.
/// That policy is explicit here instead of implicit in the summation:
/// [`RevenuePolicy::AllBookings`] reproduces it, and
/// [`RevenuePolicy::ExcludeCancelled`] is the opt-out for callers that want
/// realized revenue only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevenuePolicy {
    /// Sum every booking regardless of status
    AllBookings,
    /// Skip bookings whose status is cancelled
    ExcludeCancelled,
}

/// Headline numbers for the dashboard's stat tiles.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardStats {
    /// Total number of clients on file
    pub total_clients: usize,
    /// Revenue across all bookings, cancelled included
    pub total_revenue: f64,
    /// Scheduled bookings dated strictly after "now"
    pub upcoming_bookings: usize,
    /// Referrals that have converted
    pub active_referrals: usize,
    /// Galleries not yet delivered
    pub pending_galleries: usize,
}

/// Sums booking prices under the given policy.
#[must_use]
pub fn total_revenue(bookings: &[Booking], policy: RevenuePolicy) -> f64 {
    bookings
        .iter()
        .filter(|b| match policy {
            RevenuePolicy::AllBookings => true,
            RevenuePolicy::ExcludeCancelled => b.status != BookingStatus::Cancelled,
        })
        .map(|b| b.price)
        .sum()
}

/// Scheduled bookings strictly after `now`, soonest first.
///
/// `limit` caps the list for display; `None` returns every match.
#[must_use]
pub fn upcoming_bookings(
    bookings: &[Booking],
    now: DateTime<Utc>,
    limit: Option<usize>,
) -> Vec<Booking> {
    let mut upcoming: Vec<Booking> = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Scheduled && b.date > now)
        .cloned()
        .collect();
    upcoming.sort_by_key(|b| b.date);
    if let Some(limit) = limit {
        upcoming.truncate(limit);
    }
    upcoming
}

/// Galleries whose delivery is still outstanding (not yet `delivered`).
#[must_use]
pub fn pending_galleries(galleries: &[Gallery]) -> Vec<Gallery> {
    galleries
        .iter()
        .filter(|g| g.delivery_status != DeliveryStatus::Delivered)
        .cloned()
        .collect()
}

/// Clients with the highest stored `total_spent`, capped to `limit`.
///
/// Ranks by the stored counter, not a recomputation from bookings; see
/// [`crate::core::roster::client_activity`] for the recomputed view.
#[must_use]
pub fn top_clients(clients: &[Client], limit: usize) -> Vec<Client> {
    let mut ranked: Vec<Client> = clients.to_vec();
    ranked.sort_by(|a, b| b.total_spent.total_cmp(&a.total_spent));
    ranked.truncate(limit);
    ranked
}

/// Unsent reminders whose fire time is at or before `now`.
#[must_use]
pub fn due_reminders(reminders: &[Reminder], now: DateTime<Utc>) -> Vec<Reminder> {
    reminders
        .iter()
        .filter(|r| !r.sent && r.scheduled_for <= now)
        .cloned()
        .collect()
}

/// Computes the dashboard's headline numbers from one store snapshot.
#[must_use]
pub fn dashboard_stats(snapshot: &StoreSnapshot, now: DateTime<Utc>) -> DashboardStats {
    DashboardStats {
        total_clients: snapshot.clients.len(),
        total_revenue: total_revenue(&snapshot.bookings, RevenuePolicy::AllBookings),
        upcoming_bookings: upcoming_bookings(&snapshot.bookings, now, None).len(),
        active_referrals: snapshot
            .referrals
            .iter()
            .filter(|r| r.status == crate::entities::ReferralStatus::Converted)
            .count(),
        pending_galleries: pending_galleries(&snapshot.galleries).len(),
    }
}
