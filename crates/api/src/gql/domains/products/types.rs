use async_graphql::{Object, Result};
use infra::models::ProductRecord;

use crate::gql::common::helpers::required;

/// A stocked variant (size and color) of a product model.
///
/// Every field is non-null in the schema but the backend body is kept as is;
/// a missing value only fails the field when it is selected.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    product_model_id: Option<String>,
    id: Option<String>,
    size: Option<String>,
    color: Option<String>,
    initial_volume: Option<i32>,
    restock_volume: Option<i32>,
    return_volume: Option<i32>,
    current_stock: Option<i32>,
    purchased_volume: Option<i32>,
    is_on_sale: Option<bool>,
}

impl From<ProductRecord> for Product {
    fn from(row: ProductRecord) -> Self {
        Self {
            product_model_id: row.product_model_id,
            id: row.id,
            size: row.size,
            color: row.color,
            initial_volume: row.initial_volume,
            restock_volume: row.restock_volume,
            return_volume: row.return_volume,
            current_stock: row.current_stock,
            purchased_volume: row.purchased_volume,
            is_on_sale: row.is_on_sale,
        }
    }
}

#[Object]
impl Product {
    async fn product_model_id(&self) -> Result<&str> {
        Ok(required(self.product_model_id.as_deref(), "Product", "productModelId")?)
    }

    async fn id(&self) -> Result<&str> {
        Ok(required(self.id.as_deref(), "Product", "id")?)
    }

    async fn size(&self) -> Result<&str> {
        Ok(required(self.size.as_deref(), "Product", "size")?)
    }

    async fn color(&self) -> Result<&str> {
        Ok(required(self.color.as_deref(), "Product", "color")?)
    }

    async fn initial_volume(&self) -> Result<i32> {
        Ok(required(self.initial_volume, "Product", "initialVolume")?)
    }

    async fn restock_volume(&self) -> Result<i32> {
        Ok(required(self.restock_volume, "Product", "restockVolume")?)
    }

    async fn return_volume(&self) -> Result<i32> {
        Ok(required(self.return_volume, "Product", "returnVolume")?)
    }

    async fn current_stock(&self) -> Result<i32> {
        Ok(required(self.current_stock, "Product", "currentStock")?)
    }

    async fn purchased_volume(&self) -> Result<i32> {
        Ok(required(self.purchased_volume, "Product", "purchasedVolume")?)
    }

    async fn is_on_sale(&self) -> Result<bool> {
        Ok(required(self.is_on_sale, "Product", "isOnSale")?)
    }
}
