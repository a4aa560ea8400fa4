use serde::Serialize;

use crate::{error::Result, http::RestClient, models::ProductModelRecord};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductModelData {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader_id: Option<String>,
    pub store_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_date: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disaccount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<f64>,
}

/// Edits always carry the owning store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductModelData {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trader_id: Option<String>,
    pub store_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_date: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disaccount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selling_price: Option<f64>,
}

#[derive(Clone)]
pub struct ProductModelRepo {
    rest: RestClient,
}

impl ProductModelRepo {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    fn collection(&self) -> &str {
        &self.rest.paths().product_models
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<ProductModelRecord>> {
        self.rest.get(&[self.collection(), id]).await
    }

    pub async fn create(&self, data: CreateProductModelData) -> Result<Option<ProductModelRecord>> {
        self.rest.post(&[self.collection()], &data).await
    }

    pub async fn update(&self, data: UpdateProductModelData) -> Result<Option<ProductModelRecord>> {
        self.rest.patch(&[self.collection(), data.id.as_str()], &data).await
    }

    pub async fn delete(&self, id: &str) -> Result<Option<ProductModelRecord>> {
        self.rest.delete(&[self.collection(), id]).await
    }
}
