use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// Investor feedback on a startup profile. Append-only: no edit or delete
/// path exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub startup_slug: String,
    pub investor_id: ObjectId,
    pub investor_name: String,
    pub comment: String,
    #[serde(default)]
    pub comment_type: CommentType,
    pub created_at: DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CommentType {
    Investment,
    Hiring,
    #[default]
    General,
}

impl Comment {
    pub const COLLECTION: &'static str = "comments";
}
