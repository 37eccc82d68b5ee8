//! HTTP surface for the item store: routing, request decoding, and error
//! mapping. All state lives in `service::item::ItemStore`; this crate only
//! translates between HTTP and store operations.

pub mod errors;
pub mod routes;
pub mod startup;

pub use startup::run;
