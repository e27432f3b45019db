//! Seeding pipeline for the campus and forum schema.
//!
//! Generation lives in `campus-data`; this crate persists the generated
//! tables as JSON documents and as rows in PostgreSQL.

pub mod config;
pub mod domain;
pub mod outbound;
