//! Wire shapes of the REST backend's resources.
//!
//! Every field is optional: the backend owns the records and the facade
//! passes through whatever subset it returns. Non-null constraints are
//! applied when records are mapped onto GraphQL types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Option<String>,
    pub username: Option<String>,
    pub store_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    pub id: Option<String>,
    pub storename: Option<String>,
    pub owner_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderRecord {
    pub id: Option<String>,
    pub trader_name: Option<String>,
    pub store_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductModelRecord {
    pub id: Option<String>,
    pub trader_id: Option<String>,
    pub store_id: Option<String>,
    pub season_date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub cost_price: Option<f64>,
    pub label_price: Option<f64>,
    pub disaccount: Option<f64>,
    pub selling_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: Option<String>,
    pub product_model_id: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub initial_volume: Option<i32>,
    pub restock_volume: Option<i32>,
    pub return_volume: Option<i32>,
    pub current_stock: Option<i32>,
    pub purchased_volume: Option<i32>,
    pub is_on_sale: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingProductDetailRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingDetailRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasing_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disaccount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Option<TradingProductDetailRecord>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingRecord {
    pub id: Option<String>,
    pub trading_id: Option<String>,
    pub store_id: Option<String>,
    pub date: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub storename: Option<String>,
    pub trader_id: Option<String>,
    pub trader_name: Option<String>,
    pub trading_type: Option<String>,
    pub status: Option<String>,
    pub note: Option<String>,
    pub total_fund: Option<f64>,
    pub total_amount: Option<i32>,
    pub trading_details: Option<Vec<Option<TradingDetailRecord>>>,
}
