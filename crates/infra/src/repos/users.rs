use serde::Serialize;

use crate::{error::Result, http::RestClient, models::UserRecord};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserData {
    pub id: String,
    pub username: String,
    pub store_id: String,
}

/// Patch body; fields left as `None` are not sent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserData {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
}

#[derive(Clone)]
pub struct UserRepo {
    rest: RestClient,
}

impl UserRepo {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    fn collection(&self) -> &str {
        &self.rest.paths().users
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<UserRecord>> {
        self.rest.get(&[self.collection(), id]).await
    }

    pub async fn create(&self, data: CreateUserData) -> Result<Option<UserRecord>> {
        self.rest.post(&[self.collection()], &data).await
    }

    pub async fn update(&self, data: UpdateUserData) -> Result<Option<UserRecord>> {
        self.rest.patch(&[self.collection(), data.id.as_str()], &data).await
    }

    pub async fn delete(&self, id: &str) -> Result<Option<UserRecord>> {
        self.rest.delete(&[self.collection(), id]).await
    }
}
