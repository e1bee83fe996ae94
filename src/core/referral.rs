//! Referral aggregate computations.
//!
//! Conversion statistics and referrer rankings for the referrals view.

use crate::entities::{Client, Referral, ReferralStatus};

/// Aggregate referral statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferralStats {
    /// Total referrals on file
    pub total: usize,
    /// Referrals with status converted
    pub converted: usize,
    /// `converted / total * 100`; 0 when there are no referrals
    pub conversion_rate: f64,
    /// Sum of `value` over converted referrals only
    pub total_value: f64,
}

/// Computes conversion statistics over the referral collection.
///
/// The conversion rate is defined as 0 when there are no referrals, so the
/// empty collection never produces a division error or NaN. Unconverted
/// referrals carry no value and contribute nothing to `total_value`.
#[must_use]
pub fn referral_stats(referrals: &[Referral]) -> ReferralStats {
    let total = referrals.len();
    let converted = referrals
        .iter()
        .filter(|r| r.status == ReferralStatus::Converted)
        .count();

    // Cast safety: collection sizes are far below f64's integer precision.
    #[allow(clippy::cast_precision_loss)]
    let conversion_rate = if total == 0 {
        0.0
    } else {
        (converted as f64 / total as f64) * 100.0
    };

    let total_value = referrals
        .iter()
        .filter(|r| r.status == ReferralStatus::Converted)
        .filter_map(|r| r.value)
        .sum();

    ReferralStats {
        total,
        converted,
        conversion_rate,
        total_value,
    }
}

/// Clients credited with at least one referral, most referrals first.
///
/// Ranks by the stored `referral_count` counter, capped to `limit`.
#[must_use]
pub fn top_referrers(clients: &[Client], limit: usize) -> Vec<Client> {
    let mut referrers: Vec<Client> = clients
        .iter()
        .filter(|c| c.referral_count > 0)
        .cloned()
        .collect();
    referrers.sort_by(|a, b| b.referral_count.cmp(&a.referral_count));
    referrers.truncate(limit);
    referrers
}

/// Referrals newest first, capped to `limit`.
#[must_use]
pub fn recent_referrals(referrals: &[Referral], limit: usize) -> Vec<Referral> {
    let mut recent: Vec<Referral> = referrals.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(limit);
    recent
}
