//! Tests for bulletin endpoints.

mod bulletin_pdf;
mod news_feed;

use super::*;
