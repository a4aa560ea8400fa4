pub mod resolvers;
pub mod types;

pub use resolvers::{TradingMutation, TradingQuery};
pub use types::{Trading, TradingDetail, TradingDetailInput, TradingProductDetail};
