//! Domain layer: outbound ports and the seeding service.

pub mod ports;
mod seeding;

pub use seeding::{SeedingError, SeedingOutcome, SeedingService};
