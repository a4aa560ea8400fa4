use serde::Serialize;

use crate::{error::Result, http::RestClient, models::ProductRecord};

/// Full product body. Creates and edits both send every field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub id: String,
    pub product_model_id: String,
    pub size: String,
    pub color: String,
    pub initial_volume: i32,
    pub restock_volume: i32,
    pub return_volume: i32,
    pub current_stock: i32,
    pub purchased_volume: i32,
    pub is_on_sale: bool,
}

#[derive(Clone)]
pub struct ProductRepo {
    rest: RestClient,
}

impl ProductRepo {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    fn collection(&self) -> &str {
        &self.rest.paths().products
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<ProductRecord>> {
        self.rest.get(&[self.collection(), id]).await
    }

    pub async fn create(&self, data: ProductData) -> Result<Option<ProductRecord>> {
        self.rest.post(&[self.collection()], &data).await
    }

    pub async fn update(&self, data: ProductData) -> Result<Option<ProductRecord>> {
        self.rest.patch(&[self.collection(), data.id.as_str()], &data).await
    }

    pub async fn delete(&self, id: &str) -> Result<Option<ProductRecord>> {
        self.rest.delete(&[self.collection(), id]).await
    }
}
