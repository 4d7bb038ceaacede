pub mod assembler;
pub mod display;
pub mod publisher;
pub mod slug;

pub use assembler::{assemble, Attachment, Attachments, ProfileError, ProfileForm, TeamMemberForm};
pub use display::StartupView;
pub use publisher::{publish, PublishOutcome};
pub use slug::slugify;
