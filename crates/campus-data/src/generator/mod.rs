//! Record generators, one function per table.
//!
//! Generators take the [`Faker`] and already generated parent records and
//! return new records. Parents must be generated first; an empty parent
//! collection is reported as [`GenerationError::MissingParentRecords`].

use crate::error::GenerationError;
use crate::faker::Faker;

pub mod calendar;
pub mod curriculum;
pub mod facilities;
pub mod forum;
pub mod people;
pub mod teaching;

/// Pick a random parent record or fail with a descriptive error.
fn pick_parent<'a, T>(
    faker: &mut Faker,
    parents: &'a [T],
    table: &'static str,
    parent: &'static str,
) -> Result<&'a T, GenerationError> {
    faker
        .pick(parents)
        .ok_or(GenerationError::MissingParentRecords { table, parent })
}
