pub mod comment;
pub mod invite;
pub mod like;
pub mod reconciliation;
pub mod startup;
pub mod user;

pub use comment::{Comment, CommentType};
pub use invite::{Invite, InviteStatus};
pub use like::LikeCounter;
pub use reconciliation::Reconciliation;
pub use startup::{Startup, StartupStatus, TeamMember};
pub use user::{User, UserRole};
