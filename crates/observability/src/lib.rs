//! Tracing/logging initialization shared by binaries.

pub mod tracing;

pub use tracing::init;
