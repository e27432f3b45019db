//! PostgreSQL persistence using Diesel with `diesel-async` and `bb8` pooling.
//!
//! # Example
//!
//! ```ignore
//! use campus_seeder::outbound::persistence::{DbPool, DieselTableSink, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/campus"));
//! let sink = DieselTableSink::new(pool);
//! ```

mod diesel_table_sink;
mod pool;

pub use diesel_table_sink::DieselTableSink;
pub use pool::{DbPool, PoolConfig, PoolError};
