// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod product_models;
pub mod products;
pub mod stores;
pub mod traders;
pub mod tradings;
pub mod users;
