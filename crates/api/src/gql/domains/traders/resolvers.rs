use async_graphql::{Context, Object, Result};
use infra::repos::{CreateTraderData, UpdateTraderData};

use crate::gql::error::GqlError;
use crate::state::AppState;

use super::types::Trader;

#[derive(Default)]
pub struct TraderQuery;

#[Object]
impl TraderQuery {
    async fn trader(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<Trader>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let row = state.traders().get_by_id(&id).await.map_err(GqlError::from)?;

        Ok(row.map(Trader::from))
    }
}

#[derive(Default)]
pub struct TraderMutation;

#[Object]
impl TraderMutation {
    async fn add_trader(
        &self,
        ctx: &Context<'_>,
        trader_name: String,
        store_id: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        #[graphql(name = "type")] kind: Option<String>,
        address: Option<String>,
        note: Option<String>,
    ) -> Result<Option<Trader>> {
        let state = ctx.data::<AppState>()?;

        let data = CreateTraderData {
            id: state.next_id(),
            trader_name,
            store_id,
            email,
            phone,
            kind,
            address,
            note,
        };
        let row = state.traders().create(data).await.map_err(GqlError::from)?;

        Ok(row.map(Trader::from))
    }

    async fn edit_trader(
        &self,
        ctx: &Context<'_>,
        id: String,
        trader_name: Option<String>,
        store_id: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        #[graphql(name = "type")] kind: Option<String>,
        address: Option<String>,
        note: Option<String>,
    ) -> Result<Option<Trader>> {
        let state = ctx.data::<AppState>()?;

        let data = UpdateTraderData {
            id,
            trader_name,
            store_id,
            email,
            phone,
            kind,
            address,
            note,
        };
        let row = state.traders().update(data).await.map_err(GqlError::from)?;

        Ok(row.map(Trader::from))
    }

    async fn delete_trader(&self, ctx: &Context<'_>, id: String) -> Result<Option<Trader>> {
        let state = ctx.data::<AppState>()?;

        let row = state.traders().delete(&id).await.map_err(GqlError::from)?;

        Ok(row.map(Trader::from))
    }
}
