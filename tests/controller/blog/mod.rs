//! Tests for blog endpoints.

mod approve_blog;
mod create_blog;
mod delete_blog;

use super::*;
