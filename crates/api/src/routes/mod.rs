pub mod auth;
pub mod comment;
pub mod contact;
pub mod invite;
pub mod registration;
pub mod startup;
pub mod user;
