//! World grid runtime: chunk residency, streaming around an observer, and the
//! one-build-per-tick mesh scheduler.
#![forbid(unsafe_code)]

mod config;
mod error;
mod grid;
mod scheduler;
mod streaming;

pub use config::{ConfigError, GridConfig, MAX_WORLD_WIDTH_IN_CHUNKS};
pub use error::GridError;
pub use grid::{EditReport, GridStats, MeshDescriptor, WorldGrid};
pub use scheduler::BuildScheduler;
pub use streaming::{StreamingUpdate, desired_region};
