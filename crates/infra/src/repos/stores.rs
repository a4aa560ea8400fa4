use serde::Serialize;

use crate::{
    error::Result,
    http::RestClient,
    models::{StoreRecord, UserRecord},
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreData {
    pub id: String,
    pub storename: String,
    pub owner_id: String,
}

#[derive(Clone)]
pub struct StoreRepo {
    rest: RestClient,
}

impl StoreRepo {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    fn collection(&self) -> &str {
        &self.rest.paths().stores
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<StoreRecord>> {
        self.rest.get(&[self.collection(), id]).await
    }

    /// Users attached to a store (`/stores/:id/users`).
    pub async fn list_users(&self, store_id: &str) -> Result<Option<Vec<Option<UserRecord>>>> {
        let users = self.rest.paths().users.as_str();
        self.rest.get(&[self.collection(), store_id, users]).await
    }

    pub async fn create(&self, data: CreateStoreData) -> Result<Option<StoreRecord>> {
        self.rest.post(&[self.collection()], &data).await
    }
}
