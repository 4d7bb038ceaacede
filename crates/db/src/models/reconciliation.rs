use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// Record emitted when the invite-status update fails after the profile
/// was already published. The profile is live at that point, so the
/// registration is reported as a success; an admin resolves the stale
/// pending invite from this queue instead of the system retrying and
/// risking a double update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reconciliation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub startup_slug: String,
    pub invite_id: ObjectId,
    pub reason: String,
    pub created_at: DateTime,
}

impl Reconciliation {
    pub const COLLECTION: &'static str = "reconciliations";
}
