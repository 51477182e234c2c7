//! Tests for controller endpoints.
//!
//! Handlers are invoked directly with their extractors against an
//! in-memory database, asserting on the response status and on the
//! rows they leave behind.

mod auth;
mod blog;
mod bulletin;
mod roster;
mod user;

use super::*;
