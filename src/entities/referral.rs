//! Referral entity - Represents one client referring another to the studio.
//!
//! A referral starts `pending` and either converts (at which point a monetary
//! `value` is recorded) or is declined. The referred client may not exist yet
//! as a `Client` record, so only a name is required on that side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome status of a referral
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralStatus {
    /// Referred, no outcome yet
    Pending,
    /// Became a paying client
    Converted,
    /// Did not become a client
    Declined,
}

/// Referral data model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    /// Unique identifier, generated at creation
    pub id: String,
    /// Id of the referring client (never validated by the store)
    pub referrer_id: String,
    /// Referring client's display name, snapshotted at creation
    pub referrer_name: String,
    /// Id of the referred client, once they have a record
    pub referred_client_id: Option<String>,
    /// Name of the referred person
    pub referred_client_name: Option<String>,
    /// Current outcome status
    pub status: ReferralStatus,
    /// When the referral was recorded
    pub date: DateTime<Utc>,
    /// Dollar value of the referral, set only on conversion
    pub value: Option<f64>,
}

/// Caller-supplied fields for [`crate::store::StudioStore::add_referral`].
///
/// The id and `date` are generated by the store.
#[derive(Clone, Debug)]
pub struct NewReferral {
    /// Id of the referring client
    pub referrer_id: String,
    /// Referring client's display name at creation time
    pub referrer_name: String,
    /// Id of the referred client, if they already have a record
    pub referred_client_id: Option<String>,
    /// Name of the referred person
    pub referred_client_name: Option<String>,
    /// Initial outcome status
    pub status: ReferralStatus,
    /// Dollar value, if already converted
    pub value: Option<f64>,
}

/// Shallow field-level patch for [`crate::store::StudioStore::update_referral`].
#[derive(Clone, Debug, Default)]
pub struct ReferralPatch {
    /// Replacement referrer id
    pub referrer_id: Option<String>,
    /// Replacement referrer display name
    pub referrer_name: Option<String>,
    /// Replacement referred-client id; `Some(None)` clears it
    pub referred_client_id: Option<Option<String>>,
    /// Replacement referred-client name; `Some(None)` clears it
    pub referred_client_name: Option<Option<String>>,
    /// Replacement outcome status
    pub status: Option<ReferralStatus>,
    /// Replacement value; `Some(None)` clears it
    pub value: Option<Option<f64>>,
}

impl ReferralPatch {
    /// Merges the supplied fields into `referral`, leaving the rest untouched.
    pub(crate) fn apply(self, referral: &mut Referral) {
        if let Some(referrer_id) = self.referrer_id {
            referral.referrer_id = referrer_id;
        }
        if let Some(referrer_name) = self.referrer_name {
            referral.referrer_name = referrer_name;
        }
        if let Some(referred_client_id) = self.referred_client_id {
            referral.referred_client_id = referred_client_id;
        }
        if let Some(referred_client_name) = self.referred_client_name {
            referral.referred_client_name = referred_client_name;
        }
        if let Some(status) = self.status {
            referral.status = status;
        }
        if let Some(value) = self.value {
            referral.value = value;
        }
    }
}
