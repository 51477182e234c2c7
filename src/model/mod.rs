//! Request/response DTOs and shared application state.

pub mod activity;
pub mod api;
pub mod app;
pub mod blog;
pub mod book;
pub mod bulletin;
pub mod news;
pub mod roster;
pub mod storage;
pub mod user;
pub mod video;
