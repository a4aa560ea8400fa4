use serde::Serialize;

use crate::{error::Result, http::RestClient, models::TraderRecord};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTraderData {
    pub id: String,
    pub trader_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTraderData {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Clone)]
pub struct TraderRepo {
    rest: RestClient,
}

impl TraderRepo {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    fn collection(&self) -> &str {
        &self.rest.paths().traders
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<TraderRecord>> {
        self.rest.get(&[self.collection(), id]).await
    }

    pub async fn create(&self, data: CreateTraderData) -> Result<Option<TraderRecord>> {
        self.rest.post(&[self.collection()], &data).await
    }

    pub async fn update(&self, data: UpdateTraderData) -> Result<Option<TraderRecord>> {
        self.rest.patch(&[self.collection(), data.id.as_str()], &data).await
    }

    pub async fn delete(&self, id: &str) -> Result<Option<TraderRecord>> {
        self.rest.delete(&[self.collection(), id]).await
    }
}
