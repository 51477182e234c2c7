//! Tests for roster endpoints.

mod generate;

use super::*;
