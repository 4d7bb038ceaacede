use std::collections::HashMap;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use bson::DateTime;
use thiserror::Error;
use tracing::warn;

use jazbaa_db::models::{Startup, StartupStatus, TeamMember};
use serde::Deserialize;

use crate::storage::BlobStore;

use super::slug::slugify;

const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
const MAX_DECK_BYTES: usize = 10 * 1024 * 1024;

const DECK_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
];

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Missing required field(s): {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },
    #[error("Field '{field}' is malformed: {reason}")]
    Malformed { field: String, reason: String },
    #[error("'{field}' exceeds the {limit_mib} MiB size limit")]
    AttachmentTooLarge { field: String, limit_mib: u64 },
    #[error("'{field}' must be a {expected} file")]
    UnsupportedAttachment { field: String, expected: String },
}

/// Text fields of the registration form. All optional at the type level;
/// `assemble` enforces which ones are required.
#[derive(Debug, Default, Clone)]
pub struct ProfileForm {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub story: Option<String>,
    pub sector: Option<String>,
    pub badges: Vec<String>,
    pub team: Vec<TeamMemberForm>,
    pub website: Option<String>,
    pub app_store: Option<String>,
    pub play_store: Option<String>,
    pub demo_url: Option<String>,
    pub qr_code: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub product_video: Option<String>,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub collaboration_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamMemberForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
    #[serde(default)]
    pub pitch_video: Option<String>,
    #[serde(default)]
    pub hiring: bool,
}

#[derive(Debug, Clone)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct Attachments {
    pub logo: Option<Attachment>,
    pub pitch_deck: Option<Attachment>,
    /// Keyed by team member index.
    pub team_photos: HashMap<usize, Attachment>,
}

impl ProfileForm {
    /// Build the form from multipart text fields. The `team` field
    /// arrives as a JSON array; `badges` as a comma-separated list.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, ProfileError> {
        let get = |key: &str| fields.get(key).cloned();

        let team = match fields.get("team") {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw).map_err(|e| {
                ProfileError::Malformed {
                    field: "team".to_string(),
                    reason: e.to_string(),
                }
            })?,
            _ => Vec::new(),
        };

        let badges = fields
            .get("badges")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|b| !b.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            name: get("name"),
            tagline: get("tagline"),
            story: get("story"),
            sector: get("sector"),
            badges,
            team,
            website: get("website"),
            app_store: get("app_store"),
            play_store: get("play_store"),
            demo_url: get("demo_url"),
            qr_code: get("qr_code"),
            contact_email: get("contact_email"),
            contact_phone: get("contact_phone"),
            product_video: get("product_video"),
            problem: get("problem"),
            solution: get("solution"),
            collaboration_message: get("collaboration_message"),
        })
    }
}

/// Validate the form, upload attachments (inlining them as data URIs when
/// the blob store fails), and build the full startup record.
///
/// `created_by` is the email the originating invite was addressed to; it
/// doubles as the contact-email default.
pub async fn assemble(
    form: ProfileForm,
    attachments: Attachments,
    store: &dyn BlobStore,
    created_by: &str,
) -> Result<Startup, ProfileError> {
    let mut missing = Vec::new();

    let name = required(&form.name, "name", &mut missing);
    let tagline = required(&form.tagline, "tagline", &mut missing);
    let story = required(&form.story, "story", &mut missing);

    for (i, member) in form.team.iter().enumerate() {
        if member.name.trim().is_empty() {
            missing.push(format!("team[{i}].name"));
        }
        if member.role.trim().is_empty() {
            missing.push(format!("team[{i}].role"));
        }
    }

    if !missing.is_empty() {
        return Err(ProfileError::MissingFields { fields: missing });
    }

    let slug = slugify(&name);
    if slug.is_empty() {
        return Err(ProfileError::Malformed {
            field: "name".to_string(),
            reason: "must contain at least one letter or digit".to_string(),
        });
    }

    // Size and type checks happen before any upload attempt.
    if let Some(logo) = &attachments.logo {
        check_image(logo, "logo")?;
    }
    if let Some(deck) = &attachments.pitch_deck {
        check_deck(deck)?;
    }
    for (i, photo) in &attachments.team_photos {
        check_image(photo, &format!("team_photo_{i}"))?;
    }

    let logo = match &attachments.logo {
        Some(att) => Some(upload_or_inline(store, &slug, "logo", att).await),
        None => None,
    };
    let pitch_deck = match &attachments.pitch_deck {
        Some(att) => Some(upload_or_inline(store, &slug, "pitch-deck", att).await),
        None => None,
    };

    let mut team = Vec::with_capacity(form.team.len());
    for (i, member) in form.team.into_iter().enumerate() {
        let photo = match attachments.team_photos.get(&i) {
            Some(att) => Some(upload_or_inline(store, &slug, &format!("team-{i}"), att).await),
            None => None,
        };
        team.push(TeamMember {
            name: member.name.trim().to_string(),
            role: member.role.trim().to_string(),
            photo,
            linkedin: opt(member.linkedin),
            github: opt(member.github),
            portfolio: opt(member.portfolio),
            pitch_video: opt(member.pitch_video),
            hiring: member.hiring,
        });
    }

    let now = DateTime::now();
    Ok(Startup {
        slug,
        name,
        tagline,
        story,
        sector: opt(form.sector),
        badges: form.badges,
        team,
        website: opt(form.website),
        app_store: opt(form.app_store),
        play_store: opt(form.play_store),
        demo_url: opt(form.demo_url),
        qr_code: opt(form.qr_code),
        contact_email: opt(form.contact_email),
        contact_phone: opt(form.contact_phone),
        product_video: opt(form.product_video),
        pitch_deck,
        problem: opt(form.problem),
        solution: opt(form.solution),
        collaboration_message: opt(form.collaboration_message),
        logo,
        status: StartupStatus::Active,
        created_by: created_by.to_string(),
        interested_investors: Vec::new(),
        hiring_investors: Vec::new(),
        is_template_compatible: true,
        template_version: 1,
        created_at: now,
        profile_created_at: now,
        last_updated: now,
    })
}

fn required(value: &Option<String>, field: &str, missing: &mut Vec<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            missing.push(field.to_string());
            String::new()
        }
    }
}

/// Empty or whitespace-only optional inputs are stored as absent, never
/// as empty strings, so display code can tell "not provided" apart from
/// "provided but empty".
fn opt(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_image(att: &Attachment, field: &str) -> Result<(), ProfileError> {
    if !att.content_type.starts_with("image/") {
        return Err(ProfileError::UnsupportedAttachment {
            field: field.to_string(),
            expected: "image".to_string(),
        });
    }
    if att.bytes.len() > MAX_IMAGE_BYTES {
        return Err(ProfileError::AttachmentTooLarge {
            field: field.to_string(),
            limit_mib: 5,
        });
    }
    Ok(())
}

fn check_deck(att: &Attachment) -> Result<(), ProfileError> {
    let by_type = DECK_CONTENT_TYPES.contains(&att.content_type.as_str());
    let by_ext = att.filename.ends_with(".pdf") || att.filename.ends_with(".pptx");
    if !by_type && !by_ext {
        return Err(ProfileError::UnsupportedAttachment {
            field: "pitch_deck".to_string(),
            expected: "pdf or pptx".to_string(),
        });
    }
    if att.bytes.len() > MAX_DECK_BYTES {
        return Err(ProfileError::AttachmentTooLarge {
            field: "pitch_deck".to_string(),
            limit_mib: 10,
        });
    }
    Ok(())
}

/// Try the blob store first; on any failure embed the asset as a base64
/// data URI so registration completes regardless of storage availability.
async fn upload_or_inline(
    store: &dyn BlobStore,
    slug: &str,
    kind: &str,
    att: &Attachment,
) -> String {
    let ext = std::path::Path::new(&att.filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    let path = format!("startups/{}/{}-{}{}", slug, kind, uuid::Uuid::new_v4(), ext);

    match store.upload(&path, &att.bytes, &att.content_type).await {
        Ok(url) => url,
        Err(e) => {
            warn!(error = %e, path, "Blob upload failed, embedding asset inline");
            format!("data:{};base64,{}", att.content_type, BASE64.encode(&att.bytes))
        }
    }
}
