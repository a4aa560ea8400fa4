use async_graphql::{ComplexObject, Result, SimpleObject};
use infra::models::ProductModelRecord;

use crate::gql::common::helpers::required;

/// Catalogue entry shared by the sized/coloured products stocked under it.
#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(complex)]
pub struct ProductModel {
    #[graphql(skip)]
    pub id: Option<String>,
    pub trader_id: Option<String>,
    pub store_id: Option<String>,
    pub season_date: Option<String>,
    #[graphql(name = "type")]
    pub kind: Option<String>,
    pub cost_price: Option<f64>,
    pub label_price: Option<f64>,
    pub disaccount: Option<f64>,
    pub selling_price: Option<f64>,
}

impl From<ProductModelRecord> for ProductModel {
    fn from(row: ProductModelRecord) -> Self {
        Self {
            id: row.id,
            trader_id: row.trader_id,
            store_id: row.store_id,
            season_date: row.season_date,
            kind: row.kind,
            cost_price: row.cost_price,
            label_price: row.label_price,
            disaccount: row.disaccount,
            selling_price: row.selling_price,
        }
    }
}

#[ComplexObject]
impl ProductModel {
    async fn id(&self) -> Result<&str> {
        Ok(required(self.id.as_deref(), "ProductModel", "id")?)
    }
}
