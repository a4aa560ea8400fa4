pub mod product_models;
pub mod products;
pub mod stores;
pub mod traders;
pub mod tradings;
pub mod users;

pub use product_models::{CreateProductModelData, ProductModelRepo, UpdateProductModelData};
pub use products::{ProductData, ProductRepo};
pub use stores::{CreateStoreData, StoreRepo};
pub use traders::{CreateTraderData, TraderRepo, UpdateTraderData};
pub use tradings::{CreateTradingData, TradingRepo, UpdateTradingData};
pub use users::{CreateUserData, UpdateUserData, UserRepo};
