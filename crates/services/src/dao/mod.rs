pub mod base;
pub mod comment;
pub mod invite;
pub mod startup;
pub mod user;

pub use base::BaseDao;
