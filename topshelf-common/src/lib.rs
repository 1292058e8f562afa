//! # Topshelf Common Library
//!
//! Shared code for the topshelf media catalogue:
//! - Error types
//! - Database path resolution and initialization
//! - Song / Movie record models
//! - Rank computation for list views

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use error::{Error, Result};
