use async_graphql::{ComplexObject, InputObject, Result, SimpleObject};
use infra::models::{TradingDetailRecord, TradingProductDetailRecord, TradingRecord};

use crate::gql::common::helpers::required;

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct TradingProductDetail {
    pub product_id: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub amount: Option<i32>,
}

impl From<TradingProductDetailRecord> for TradingProductDetail {
    fn from(row: TradingProductDetailRecord) -> Self {
        Self {
            product_id: row.product_id,
            size: row.size,
            color: row.color,
            amount: row.amount,
        }
    }
}

/// One product model line of a trading, broken down per product.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct TradingDetail {
    pub product_model_id: Option<String>,
    pub product_type: Option<String>,
    pub purchasing_price: Option<f64>,
    pub label_price: Option<f64>,
    pub disaccount: Option<f64>,
    pub amount: Option<i32>,
    pub total_cost: Option<f64>,
    pub products: Option<Vec<Option<TradingProductDetail>>>,
}

impl From<TradingDetailRecord> for TradingDetail {
    fn from(row: TradingDetailRecord) -> Self {
        Self {
            product_model_id: row.product_model_id,
            product_type: row.product_type,
            purchasing_price: row.purchasing_price,
            label_price: row.label_price,
            disaccount: row.disaccount,
            amount: row.amount,
            total_cost: row.total_cost,
            products: row.products.map(|products| {
                products
                    .into_iter()
                    .map(|p| p.map(TradingProductDetail::from))
                    .collect()
            }),
        }
    }
}

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(complex)]
pub struct Trading {
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
    #[graphql(skip)]
    pub trading_details: Option<Vec<Option<TradingDetail>>>,
}

impl From<TradingRecord> for Trading {
    fn from(row: TradingRecord) -> Self {
        Self {
            id: row.id,
            trading_id: row.trading_id,
            store_id: row.store_id,
            date: row.date,
            user_id: row.user_id,
            username: row.username,
            storename: row.storename,
            trader_id: row.trader_id,
            trader_name: row.trader_name,
            trading_type: row.trading_type,
            status: row.status,
            note: row.note,
            total_fund: row.total_fund,
            total_amount: row.total_amount,
            trading_details: row.trading_details.map(|details| {
                details
                    .into_iter()
                    .map(|d| d.map(TradingDetail::from))
                    .collect()
            }),
        }
    }
}

#[ComplexObject]
impl Trading {
    async fn trading_details(&self) -> Result<Vec<Option<TradingDetail>>> {
        Ok(required(self.trading_details.clone(), "Trading", "tradingDetails")?)
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct TradingProductDetailInput {
    pub product_id: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub amount: Option<i32>,
}

impl From<TradingProductDetailInput> for TradingProductDetailRecord {
    fn from(input: TradingProductDetailInput) -> Self {
        Self {
            product_id: input.product_id,
            size: input.size,
            color: input.color,
            amount: input.amount,
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct TradingDetailInput {
    pub product_model_id: Option<String>,
    pub product_type: Option<String>,
    pub purchasing_price: Option<f64>,
    pub label_price: Option<f64>,
    pub disaccount: Option<f64>,
    pub amount: Option<i32>,
    pub total_cost: Option<f64>,
    pub products: Option<Vec<Option<TradingProductDetailInput>>>,
}

impl From<TradingDetailInput> for TradingDetailRecord {
    fn from(input: TradingDetailInput) -> Self {
        Self {
            product_model_id: input.product_model_id,
            product_type: input.product_type,
            purchasing_price: input.purchasing_price,
            label_price: input.label_price,
            disaccount: input.disaccount,
            amount: input.amount,
            total_cost: input.total_cost,
            products: input.products.map(|products| {
                products
                    .into_iter()
                    .map(|p| p.map(TradingProductDetailRecord::from))
                    .collect()
            }),
        }
    }
}

/// Wire form of a `[TradingDetailInput]` argument.
pub fn detail_records(
    details: Vec<Option<TradingDetailInput>>,
) -> Vec<Option<TradingDetailRecord>> {
    details
        .into_iter()
        .map(|d| d.map(TradingDetailRecord::from))
        .collect()
}
