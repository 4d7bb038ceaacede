use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// Platform account. Role is fixed at creation and only admins create
/// other users. College and investor accounts carry exactly the external
/// id matching their role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Investor,
    College,
}

impl User {
    pub const COLLECTION: &'static str = "users";
}
