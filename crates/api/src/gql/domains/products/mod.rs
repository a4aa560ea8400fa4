pub mod resolvers;
pub mod types;

pub use resolvers::{ProductMutation, ProductQuery};
pub use types::Product;
