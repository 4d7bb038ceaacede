use serde::Serialize;

use jazbaa_db::models::{Startup, StartupStatus, TeamMember};

pub const PLACEHOLDER_PROBLEM: &str = "Problem description not available";
pub const PLACEHOLDER_SOLUTION: &str = "Solution description not available";
pub const PLACEHOLDER_COLLABORATION: &str = "Open to collaboration opportunities";
pub const PLACEHOLDER_SECTOR: &str = "Technology";
pub const PLACEHOLDER_LOGO: &str = "/images/default-logo.png";
pub const PLACEHOLDER_AVATAR: &str = "/images/default-avatar.png";

/// Display form of a profile: every optional field resolved to its
/// placeholder so page rendering never sees an absent value. This is the
/// single place placeholders are applied — always on read, never written
/// back to the store — so re-reads after a partial update still degrade
/// gracefully.
#[derive(Debug, Serialize)]
pub struct StartupView {
    pub slug: String,
    pub name: String,
    pub tagline: String,
    pub story: String,
    pub sector: String,
    pub badges: Vec<String>,
    pub team: Vec<TeamMemberView>,
    pub website: String,
    pub app_store: String,
    pub play_store: String,
    pub demo_url: String,
    pub qr_code: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub product_video: String,
    pub pitch_deck: String,
    pub problem: String,
    pub solution: String,
    pub collaboration_message: String,
    pub logo: String,
    pub status: StartupStatus,
    pub interested_investors: Vec<String>,
    pub hiring_investors: Vec<String>,
    pub created_at: String,
}

#[derive(Debug, Serialize)]
pub struct TeamMemberView {
    pub name: String,
    pub role: String,
    pub photo: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    pub pitch_video: String,
    pub hiring: bool,
}

impl From<Startup> for StartupView {
    fn from(s: Startup) -> Self {
        // Absent links render as empty strings (hidden by display code);
        // absent text sections get readable placeholders. The invite
        // email stands in for a missing contact address.
        let contact_email = s
            .contact_email
            .unwrap_or_else(|| s.created_by.clone());

        Self {
            slug: s.slug,
            name: s.name,
            tagline: s.tagline,
            story: s.story,
            sector: s.sector.unwrap_or_else(|| PLACEHOLDER_SECTOR.to_string()),
            badges: s.badges,
            team: s.team.into_iter().map(TeamMemberView::from).collect(),
            website: s.website.unwrap_or_default(),
            app_store: s.app_store.unwrap_or_default(),
            play_store: s.play_store.unwrap_or_default(),
            demo_url: s.demo_url.unwrap_or_default(),
            qr_code: s.qr_code.unwrap_or_default(),
            contact_email,
            contact_phone: s.contact_phone.unwrap_or_default(),
            product_video: s.product_video.unwrap_or_default(),
            pitch_deck: s.pitch_deck.unwrap_or_default(),
            problem: s.problem.unwrap_or_else(|| PLACEHOLDER_PROBLEM.to_string()),
            solution: s
                .solution
                .unwrap_or_else(|| PLACEHOLDER_SOLUTION.to_string()),
            collaboration_message: s
                .collaboration_message
                .unwrap_or_else(|| PLACEHOLDER_COLLABORATION.to_string()),
            logo: s.logo.unwrap_or_else(|| PLACEHOLDER_LOGO.to_string()),
            status: s.status,
            interested_investors: s.interested_investors,
            hiring_investors: s.hiring_investors,
            created_at: s
                .created_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
        }
    }
}

impl From<TeamMember> for TeamMemberView {
    fn from(m: TeamMember) -> Self {
        Self {
            name: m.name,
            role: m.role,
            photo: m.photo.unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string()),
            linkedin: m.linkedin.unwrap_or_default(),
            github: m.github.unwrap_or_default(),
            portfolio: m.portfolio.unwrap_or_default(),
            pitch_video: m.pitch_video.unwrap_or_default(),
            hiring: m.hiring,
        }
    }
}
