pub mod resolvers;
pub mod types;

pub use resolvers::{TraderMutation, TraderQuery};
pub use types::Trader;
