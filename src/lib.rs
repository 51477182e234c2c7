//! Parish application core modules.
//!
//! Backend for a congregation's public website and internal admin console:
//! content APIs (blogs, videos, books, news, duty rosters, special dates),
//! role-gated admin operations, Firebase identity sync into the relational
//! user table, and the weekly bulletin aggregator with PDF export.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
