use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// A registration invite sent to a founder's email address.
///
/// The token is queried by value, not used as the `_id`, so an invite keeps
/// a stable identity even if a token were ever reissued. Invites are never
/// deleted; the only status transition is `Pending` -> `Registered`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invite {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub token: String,
    pub invited_by: ObjectId,
    /// Count of invites previously sent to this email, plus one.
    pub invite_number: u32,
    #[serde(default)]
    pub status: InviteStatus,
    pub startup_slug: Option<String>,
    pub invited_at: DateTime,
    pub registered_at: Option<DateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InviteStatus {
    #[default]
    Pending,
    Registered,
    Expired,
}

impl Invite {
    pub const COLLECTION: &'static str = "invites";
}
