//! Tests for identity endpoints.

mod check_role;
mod sync;

use super::*;
