//! Report formatting.
//!
//! Display-ready strings for the dashboard binary: currency, a text rate bar,
//! and the full terminal summary. All functions are pure string builders that
//! can be reused by any presentation layer.

use crate::core::dashboard::DashboardStats;
use crate::core::referral::ReferralStats;
use crate::entities::{Booking, Client};

/// Formats a dollar amount like `$599.00` (or `-$25.50` when negative).
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${amount:.2}")
    }
}

/// Renders a percentage as a text bar for visual representation.
///
/// Produces output like: `[████████░░] 80.0%`
///
/// # Arguments
/// * `rate_percent` - Percentage to render (clamped to 0-100 for the bar)
/// * `bar_length` - Length of the bar in characters (default 10)
#[must_use]
pub fn format_rate_bar(rate_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_rate = rate_percent.clamp(0.0, 100.0);

    // Cast safety: clamped_rate ∈ [0, 100], length is small (10-20).
    // Result is mathematically in [0, length], truncation/sign loss intentional for display.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_rate / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    let filled_str = "█".repeat(filled);
    let empty_str = "░".repeat(empty);

    format!("[{filled_str}{empty_str}] {rate_percent:.1}%")
}

/// One summary line for an upcoming booking.
#[must_use]
pub fn format_booking_line(booking: &Booking) -> String {
    format!(
        "{} | {} ({}) | {}",
        booking.date.format("%Y-%m-%d %H:%M"),
        booking.client_name,
        booking.package_name,
        format_currency(booking.price)
    )
}

/// Renders the full dashboard summary for terminal display.
///
/// # Arguments
/// * `stats` - Headline dashboard numbers
/// * `referrals` - Referral conversion statistics
/// * `top_clients` - Highest-spending clients, already capped for display
/// * `upcoming` - Upcoming bookings, already capped for display
#[must_use]
pub fn format_dashboard_summary(
    stats: &DashboardStats,
    referrals: &ReferralStats,
    top_clients: &[Client],
    upcoming: &[Booking],
) -> String {
    use std::fmt::Write;

    let mut summary = format!(
        "Studio Dashboard - {} clients | Revenue {}\n",
        stats.total_clients,
        format_currency(stats.total_revenue)
    );

    // write! is infallible when writing to String, so unwrap is safe
    write!(
        summary,
        "  Upcoming shoots: {} | Pending galleries: {} | Converted referrals: {}\n\n",
        stats.upcoming_bookings, stats.pending_galleries, stats.active_referrals
    )
    .unwrap();

    writeln!(
        summary,
        "  Referral conversion ({} of {}): {} | Referral value: {}",
        referrals.converted,
        referrals.total,
        format_rate_bar(referrals.conversion_rate, None),
        format_currency(referrals.total_value)
    )
    .unwrap();

    if !upcoming.is_empty() {
        writeln!(summary, "\nUpcoming shoots:").unwrap();
        for booking in upcoming {
            writeln!(summary, "  {}", format_booking_line(booking)).unwrap();
        }
    }

    if !top_clients.is_empty() {
        writeln!(summary, "\nTop clients:").unwrap();
        for client in top_clients {
            writeln!(
                summary,
                "  {} - {} | {} bookings",
                client.name,
                format_currency(client.total_spent),
                client.total_bookings
            )
            .unwrap();
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::dashboard;
    use crate::core::referral;
    use crate::store::StudioStore;
    use crate::config::default_fixtures;
    use chrono::Utc;

    #[test]
    fn test_format_currency_positive() {
        assert_eq!(format_currency(599.0), "$599.00");
        assert_eq!(format_currency(123.45), "$123.45");
    }

    #[test]
    fn test_format_currency_zero() {
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-25.5), "-$25.50");
    }

    #[test]
    fn test_format_rate_bar_full() {
        let bar = format_rate_bar(100.0, Some(10));
        assert_eq!(bar, "[██████████] 100.0%");
    }

    #[test]
    fn test_format_rate_bar_half() {
        let bar = format_rate_bar(50.0, Some(10));
        assert_eq!(bar, "[█████░░░░░] 50.0%");
    }

    #[test]
    fn test_format_rate_bar_zero() {
        let bar = format_rate_bar(0.0, Some(10));
        assert_eq!(bar, "[░░░░░░░░░░] 0.0%");
    }

    #[test]
    fn test_format_rate_bar_over_hundred_is_clamped() {
        // The number is printed as-is; only the bar is clamped.
        let bar = format_rate_bar(150.0, Some(10));
        assert_eq!(bar, "[██████████] 150.0%");
    }

    #[tokio::test]
    async fn test_format_dashboard_summary_contains_key_information() {
        let store = StudioStore::with_fixtures(default_fixtures());
        let snapshot = store.snapshot().await;
        let now = Utc::now();

        let stats = dashboard::dashboard_stats(&snapshot, now);
        let referral_stats = referral::referral_stats(&snapshot.referrals);
        let top = dashboard::top_clients(&snapshot.clients, 5);
        let upcoming = dashboard::upcoming_bookings(&snapshot.bookings, now, Some(5));

        let summary = format_dashboard_summary(&stats, &referral_stats, &top, &upcoming);

        assert!(summary.contains("2 clients"));
        // Revenue comes from the single sample booking.
        assert!(summary.contains("$599.00"));
        assert!(summary.contains("Referral conversion (1 of 1)"));
        assert!(summary.contains("100.0%"));
        assert!(summary.contains("Top clients:"));
        // Sample client names from the fixture set, highest spender first.
        assert!(summary.contains("Emma Watson"));
        assert!(summary.contains("James Rodriguez"));
        let emma = summary.find("Emma Watson").unwrap();
        let james = summary.find("James Rodriguez").unwrap();
        assert!(emma < james);
    }
}
