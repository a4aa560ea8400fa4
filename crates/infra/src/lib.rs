pub mod config;
pub mod error;
pub mod http;
pub mod ids;
pub mod models;
pub mod repos;

pub use config::{ResourcePaths, RestConfig};
pub use error::RestError;
pub use http::RestClient;
pub use ids::{IdGenerator, UuidGenerator};
