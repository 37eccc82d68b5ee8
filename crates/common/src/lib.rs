//! Shared pieces used by the server crate and the binary: wire-level types
//! that are not tied to any one route, and the logging initializer.

pub mod types;
pub mod utils;
