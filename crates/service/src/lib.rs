//! Service layer owning the item collection and its business rules.
//! - Keeps all reads and writes behind the `ItemStore` so the HTTP layer
//!   never touches the raw collection.
//! - Validates typed inputs before any mutation is applied.
//! - Exposes a small, explicit error taxonomy for the HTTP layer to map.

pub mod errors;
pub mod item;
