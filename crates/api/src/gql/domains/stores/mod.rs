pub mod resolvers;
pub mod types;

pub use resolvers::{StoreMutation, StoreQuery};
pub use types::Store;
