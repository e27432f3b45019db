//! Deterministic seed data for a university and forum management system.
//!
//! This crate generates believable, relational records: faculties,
//! curriculums and majors, academic calendars, user accounts with student and
//! professor profiles, buildings and rooms, subjects with weekly schedules,
//! grading criteria, and a forum with posts, replies, views and votes. It has
//! no database or async dependencies; persistence adapters consume the
//! [`TableBatch`] values produced by [`Dataset::batches`].
//!
//! # Overview
//!
//! - [`GenerationConfig`] carries the seed, the reference "now" and record
//!   counts.
//! - [`generate_dataset`] runs every generator in foreign-key order.
//! - [`schema`] describes each table's ordered columns, shared by the JSON
//!   writer and SQL inserters.
//! - [`write_table_document`] writes a table to `<dir>/<table>.json`
//!   atomically.
//!
//! # Example
//!
//! ```
//! use campus_data::{GenerationConfig, generate_dataset};
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid time");
//! let config = GenerationConfig::new(42, now)
//!     .with_faculty_count(6)
//!     .with_curriculums_per_faculty(6)
//!     .with_majors_per_curriculum(6)
//!     .with_student_count(20)
//!     .with_post_count(5);
//!
//! let dataset = generate_dataset(&config).expect("generation succeeds");
//! assert_eq!(dataset.majors.len(), 216);
//!
//! let again = generate_dataset(&config).expect("generation succeeds");
//! assert_eq!(dataset, again);
//! ```

mod config;
mod content;
mod dataset;
mod error;
mod faker;
pub mod generator;
mod geo;
mod ids;
mod output;
pub mod records;
pub mod schema;
mod slug;

pub use config::{DEFAULT_CAMPUS_CENTER, DEFAULT_ID_LENGTH, GenerationConfig};
pub use content::{generate_markdown_content, generate_plain_content, generate_short_blockquote};
pub use dataset::{Dataset, generate_dataset};
pub use error::{GenerationError, OutputError, UnknownDiscriminant};
pub use faker::{Faker, random_id};
pub use geo::{Point, nearby_point};
pub use ids::{is_valid_national_id, national_id, nid_checksum};
pub use output::{DEFAULT_OUTPUT_DIR, open_output_dir, write_atomic, write_table_document};
pub use schema::{TableBatch, TableRecord};
pub use slug::{is_valid_slug, slugify};
