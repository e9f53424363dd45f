//! File collaborators around the matching engine.
//!
//! - [`reader`]: parse and validate instances, read matchings back
//! - [`writer`]: persist matchings and instances
//! - [`generator`]: random instances for tests, benchmarks and sweeps
//!
//! Nothing here runs inside the proposal loop.

pub mod generator;
pub mod reader;
pub mod writer;

pub use generator::{generate_instance, generate_seeded};
pub use reader::{parse_instance, read_instance, read_instance_from_path, read_matching};
pub use writer::{write_instance, write_instance_to_path, write_matching, write_matching_to_path};
