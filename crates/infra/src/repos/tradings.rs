use serde::Serialize;

use crate::{
    error::Result,
    http::RestClient,
    models::{TradingDetailRecord, TradingRecord},
};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTradingData {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_fund: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<i32>,
    pub trading_details: Vec<Option<TradingDetailRecord>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTradingData {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_fund: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_details: Option<Vec<Option<TradingDetailRecord>>>,
}

#[derive(Clone)]
pub struct TradingRepo {
    rest: RestClient,
}

impl TradingRepo {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    fn collection(&self) -> &str {
        &self.rest.paths().tradings
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<TradingRecord>> {
        self.rest.get(&[self.collection(), id]).await
    }

    pub async fn create(&self, data: CreateTradingData) -> Result<Option<TradingRecord>> {
        self.rest.post(&[self.collection()], &data).await
    }

    pub async fn update(&self, data: UpdateTradingData) -> Result<Option<TradingRecord>> {
        self.rest.patch(&[self.collection(), data.id.as_str()], &data).await
    }

    pub async fn delete(&self, id: &str) -> Result<Option<TradingRecord>> {
        self.rest.delete(&[self.collection(), id]).await
    }
}
