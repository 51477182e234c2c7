//! Data access layer repositories.
//!
//! Repositories provide an abstraction over database operations, organized
//! by domain. All are generic over [`sea_orm::ConnectionTrait`] so services
//! can run them against the pooled connection or inside a transaction.

pub mod activity;
pub mod blog;
pub mod book;
pub mod news;
pub mod roster;
pub mod special_date;
pub mod user;
pub mod video;
