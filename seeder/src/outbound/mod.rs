//! Outbound adapters implementing the domain ports.

pub mod json_files;
pub mod persistence;
