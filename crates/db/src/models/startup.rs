use bson::DateTime;
use serde::{Deserialize, Serialize};

/// A published startup profile.
///
/// The slug is the document `_id` in both the primary and backup
/// collections: it is derived from the name at registration time and is
/// the permanent public identifier, never changed afterwards.
///
/// Optional fields are stored as absent, never as empty strings; display
/// placeholders are filled on read (see `jazbaa-services` profile display
/// normalization), so a partial update never bakes placeholder text into
/// the stored document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Startup {
    #[serde(rename = "_id")]
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub story: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_store: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_store: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_video: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch_deck: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaboration_message: Option<String>,
    /// Either a blob-store URL or an inline `data:` URI when the blob
    /// store was unavailable at registration time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub status: StartupStatus,
    /// Email the originating invite was addressed to.
    pub created_by: String,
    #[serde(default)]
    pub interested_investors: Vec<String>,
    #[serde(default)]
    pub hiring_investors: Vec<String>,
    #[serde(default = "bool_true")]
    pub is_template_compatible: bool,
    #[serde(default = "default_template_version")]
    pub template_version: u32,
    pub created_at: DateTime,
    pub profile_created_at: DateTime,
    pub last_updated: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    /// Blob-store URL or inline `data:` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch_video: Option<String>,
    #[serde(default)]
    pub hiring: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StartupStatus {
    #[default]
    Active,
    Inactive,
}

impl Startup {
    pub const COLLECTION: &'static str = "startups";
    pub const BACKUP_COLLECTION: &'static str = "startups_backup";
}

fn bool_true() -> bool {
    true
}

fn default_template_version() -> u32 {
    1
}
