//! Business logic layer.
//!
//! Services validate input, enforce the authorization policy, coordinate
//! repositories and record activity log entries. Controllers stay thin by
//! delegating here.

pub mod activity;
pub mod auth;
pub mod blog;
pub mod book;
pub mod bulletin;
pub mod news;
pub mod pdf;
pub mod policy;
pub mod roster;
pub mod special_date;
pub mod user;
pub mod video;
