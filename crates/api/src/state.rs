use std::sync::Arc;

use infra::repos::{ProductModelRepo, ProductRepo, StoreRepo, TraderRepo, TradingRepo, UserRepo};
use infra::{IdGenerator, RestClient, RestConfig, UuidGenerator};

#[derive(Clone)]
pub struct AppState {
    pub rest: RestClient,
    ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new(config: &RestConfig) -> anyhow::Result<Self> {
        let rest = RestClient::new(config)?;
        Ok(Self::with_parts(rest, Arc::new(UuidGenerator)))
    }

    pub fn with_parts(rest: RestClient, ids: Arc<dyn IdGenerator>) -> Self {
        Self { rest, ids }
    }

    /// Fresh identifier for an entity about to be created.
    pub fn next_id(&self) -> String {
        self.ids.next_id()
    }

    pub fn users(&self) -> UserRepo {
        UserRepo::new(self.rest.clone())
    }

    pub fn stores(&self) -> StoreRepo {
        StoreRepo::new(self.rest.clone())
    }

    pub fn traders(&self) -> TraderRepo {
        TraderRepo::new(self.rest.clone())
    }

    pub fn product_models(&self) -> ProductModelRepo {
        ProductModelRepo::new(self.rest.clone())
    }

    pub fn products(&self) -> ProductRepo {
        ProductRepo::new(self.rest.clone())
    }

    pub fn tradings(&self) -> TradingRepo {
        TradingRepo::new(self.rest.clone())
    }
}
