//! HTTP controller endpoints for the parish web API.
//!
//! Controllers handle HTTP requests, deserialize inputs, delegate to the
//! service layer and map results to responses. Each handler carries its
//! utoipa annotation for the generated OpenAPI document.

pub mod activity;
pub mod auth;
pub mod blog;
pub mod book;
pub mod bulletin;
pub mod news;
pub mod roster;
pub mod special_date;
pub mod storage;
pub mod user;
pub mod video;
