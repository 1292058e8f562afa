//! Database access for topshelf-ui
//!
//! Per-table repositories over the shared pool. Schema creation lives in
//! topshelf-common; these modules only read and write rows.

pub mod movies;
pub mod songs;
