use async_graphql::{Context, Object, Result};
use infra::repos::CreateStoreData;

use crate::gql::error::GqlError;
use crate::state::AppState;

use super::types::Store;

#[derive(Default)]
pub struct StoreQuery;

#[Object]
impl StoreQuery {
    async fn store(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<Store>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let row = state.stores().get_by_id(&id).await.map_err(GqlError::from)?;

        Ok(row.map(Store::from))
    }
}

#[derive(Default)]
pub struct StoreMutation;

#[Object]
impl StoreMutation {
    /// Create a store. Missing name or owner are stored as empty strings.
    async fn add_store(
        &self,
        ctx: &Context<'_>,
        storename: Option<String>,
        owner_id: Option<String>,
    ) -> Result<Option<Store>> {
        let state = ctx.data::<AppState>()?;

        let data = CreateStoreData {
            id: state.next_id(),
            storename: storename.unwrap_or_default(),
            owner_id: owner_id.unwrap_or_default(),
        };
        let row = state.stores().create(data).await.map_err(GqlError::from)?;

        Ok(row.map(Store::from))
    }
}
