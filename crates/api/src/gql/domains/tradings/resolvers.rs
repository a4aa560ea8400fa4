use async_graphql::{Context, Object, Result};
use infra::repos::{CreateTradingData, UpdateTradingData};

use crate::gql::error::GqlError;
use crate::state::AppState;

use super::types::{detail_records, Trading, TradingDetailInput};

#[derive(Default)]
pub struct TradingQuery;

#[Object]
impl TradingQuery {
    async fn trading(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<Trading>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let row = state.tradings().get_by_id(&id).await.map_err(GqlError::from)?;

        Ok(row.map(Trading::from))
    }
}

#[derive(Default)]
pub struct TradingMutation;

#[Object]
impl TradingMutation {
    /// Record a trading together with its detail lines.
    async fn add_trading(
        &self,
        ctx: &Context<'_>,
        trading_id: Option<String>,
        store_id: Option<String>,
        date: Option<String>,
        user_id: Option<String>,
        username: Option<String>,
        storename: Option<String>,
        trader_id: Option<String>,
        trader_name: Option<String>,
        trading_type: Option<String>,
        status: Option<String>,
        note: Option<String>,
        total_fund: Option<f64>,
        total_amount: Option<i32>,
        trading_details: Vec<Option<TradingDetailInput>>,
    ) -> Result<Option<Trading>> {
        let state = ctx.data::<AppState>()?;

        let data = CreateTradingData {
            id: state.next_id(),
            trading_id,
            store_id,
            date,
            user_id,
            username,
            storename,
            trader_id,
            trader_name,
            trading_type,
            status,
            note,
            total_fund,
            total_amount,
            trading_details: detail_records(trading_details),
        };
        let row = state.tradings().create(data).await.map_err(GqlError::from)?;

        Ok(row.map(Trading::from))
    }

    async fn edit_trading(
        &self,
        ctx: &Context<'_>,
        id: String,
        trading_id: Option<String>,
        store_id: Option<String>,
        date: Option<String>,
        user_id: Option<String>,
        username: Option<String>,
        storename: Option<String>,
        trader_id: Option<String>,
        trader_name: Option<String>,
        trading_type: Option<String>,
        status: Option<String>,
        note: Option<String>,
        total_fund: Option<f64>,
        total_amount: Option<i32>,
        trading_details: Option<Vec<Option<TradingDetailInput>>>,
    ) -> Result<Option<Trading>> {
        let state = ctx.data::<AppState>()?;

        let data = UpdateTradingData {
            id,
            trading_id,
            store_id,
            date,
            user_id,
            username,
            storename,
            trader_id,
            trader_name,
            trading_type,
            status,
            note,
            total_fund,
            total_amount,
            trading_details: trading_details.map(detail_records),
        };
        let row = state.tradings().update(data).await.map_err(GqlError::from)?;

        Ok(row.map(Trading::from))
    }

    async fn delete_trading(&self, ctx: &Context<'_>, id: String) -> Result<Option<Trading>> {
        let state = ctx.data::<AppState>()?;

        let row = state.tradings().delete(&id).await.map_err(GqlError::from)?;

        Ok(row.map(Trading::from))
    }
}
