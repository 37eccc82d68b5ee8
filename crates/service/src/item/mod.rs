pub mod model;
pub mod store;

pub use model::{Item, ItemInput};
pub use store::ItemStore;
