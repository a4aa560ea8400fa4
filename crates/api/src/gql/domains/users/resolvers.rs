use async_graphql::{Context, Object, Result};
use infra::repos::{CreateUserData, UpdateUserData};

use crate::gql::error::GqlError;
use crate::state::AppState;

use super::types::User;

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    async fn user(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<User>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let row = state.users().get_by_id(&id).await.map_err(GqlError::from)?;

        Ok(row.map(User::from))
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        store_id: String,
    ) -> Result<Option<User>> {
        let state = ctx.data::<AppState>()?;

        let data = CreateUserData {
            id: state.next_id(),
            username,
            store_id,
        };
        let row = state.users().create(data).await.map_err(GqlError::from)?;

        Ok(row.map(User::from))
    }

    /// Patch a user; only the supplied fields are sent
    async fn edit_user(
        &self,
        ctx: &Context<'_>,
        id: String,
        username: Option<String>,
        store_id: Option<String>,
    ) -> Result<Option<User>> {
        let state = ctx.data::<AppState>()?;

        let data = UpdateUserData {
            id,
            username,
            store_id,
        };
        let row = state.users().update(data).await.map_err(GqlError::from)?;

        Ok(row.map(User::from))
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: String) -> Result<Option<User>> {
        let state = ctx.data::<AppState>()?;

        let row = state.users().delete(&id).await.map_err(GqlError::from)?;

        Ok(row.map(User::from))
    }
}
