//! Tests for user administration endpoints.

mod list_users;
mod update_role;

use super::*;
