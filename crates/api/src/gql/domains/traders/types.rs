use async_graphql::{ComplexObject, Result, SimpleObject};
use infra::models::TraderRecord;

use crate::gql::common::helpers::required;

#[derive(SimpleObject, Clone, Debug, PartialEq)]
#[graphql(complex)]
pub struct Trader {
    #[graphql(skip)]
    pub id: Option<String>,
    pub trader_name: Option<String>,
    pub store_id: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[graphql(name = "type")]
    pub kind: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
}

impl From<TraderRecord> for Trader {
    fn from(row: TraderRecord) -> Self {
        Self {
            id: row.id,
            trader_name: row.trader_name,
            store_id: row.store_id,
            email: row.email,
            phone: row.phone,
            kind: row.kind,
            address: row.address,
            note: row.note,
        }
    }
}

#[ComplexObject]
impl Trader {
    async fn id(&self) -> Result<&str> {
        Ok(required(self.id.as_deref(), "Trader", "id")?)
    }
}
