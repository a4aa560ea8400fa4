pub mod resolvers;
pub mod types;

pub use resolvers::{ProductModelMutation, ProductModelQuery};
pub use types::ProductModel;
