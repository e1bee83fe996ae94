//! Referral collection operations.

use super::{StudioStore, new_entity_id};
use crate::entities::{NewReferral, Referral, ReferralPatch};
use std::sync::Arc;
use tracing::debug;

impl StudioStore {
    /// Adds a new referral and returns the stored record.
    ///
    /// The store generates the id and stamps `date` from its clock. The
    /// referrer's `referral_count` counter is NOT touched here - counters are
    /// caller-maintained and each mutation touches exactly one collection.
    pub async fn add_referral(&self, new: NewReferral) -> Referral {
        let referral = Referral {
            id: new_entity_id(),
            referrer_id: new.referrer_id,
            referrer_name: new.referrer_name,
            referred_client_id: new.referred_client_id,
            referred_client_name: new.referred_client_name,
            status: new.status,
            date: self.now(),
            value: new.value,
        };

        let mut state = self.state.write().await;
        let mut referrals = state.referrals.as_ref().clone();
        referrals.push(referral.clone());
        state.referrals = Arc::new(referrals);
        debug!(referral_id = %referral.id, "Added referral.");
        referral
    }

    /// Merges `patch` into the referral with `id`. No-op if the id is absent.
    ///
    /// Conversion is expressed as a patch setting `status` to `converted`
    /// together with the monetary `value`.
    pub async fn update_referral(&self, id: &str, patch: ReferralPatch) {
        let mut state = self.state.write().await;
        let mut referrals = state.referrals.as_ref().clone();
        if let Some(referral) = referrals.iter_mut().find(|r| r.id == id) {
            patch.apply(referral);
            state.referrals = Arc::new(referrals);
            debug!(referral_id = %id, "Updated referral.");
        }
    }

    /// Removes the referral with `id`, if present.
    pub async fn delete_referral(&self, id: &str) {
        let mut state = self.state.write().await;
        if state.referrals.iter().any(|r| r.id == id) {
            let referrals = state
                .referrals
                .iter()
                .filter(|r| r.id != id)
                .cloned()
                .collect();
            state.referrals = Arc::new(referrals);
            debug!(referral_id = %id, "Deleted referral.");
        }
    }

    /// Current referral collection.
    pub async fn referrals(&self) -> Arc<Vec<Referral>> {
        Arc::clone(&self.state.read().await.referrals)
    }

    /// Looks up a single referral by id.
    pub async fn referral_by_id(&self, id: &str) -> Option<Referral> {
        self.state
            .read()
            .await
            .referrals
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }
}
