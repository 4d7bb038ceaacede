use serde::{Deserialize, Serialize};

/// Per-slug like counter, kept out of the profile document so rapid
/// likes contend on this small record instead of the full profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeCounter {
    #[serde(rename = "_id")]
    pub slug: String,
    #[serde(default)]
    pub count: i64,
}

impl LikeCounter {
    pub const COLLECTION: &'static str = "likes";
}
