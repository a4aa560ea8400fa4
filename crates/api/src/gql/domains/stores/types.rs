use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use infra::models::{StoreRecord, UserRecord};

use crate::gql::domains::users::User;
use crate::gql::error::GqlError;
use crate::state::AppState;

#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Store {
    pub id: Option<String>,
    pub storename: Option<String>,
    #[graphql(skip)]
    pub owner_id: Option<String>,
}

impl From<StoreRecord> for Store {
    fn from(row: StoreRecord) -> Self {
        Self {
            id: row.id,
            storename: row.storename,
            owner_id: row.owner_id,
        }
    }
}

// Relational fields each hit the backend on their own; nothing is shared
// between owner, staff and clients.
#[ComplexObject]
impl Store {
    async fn owner(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let Some(owner_id) = self.owner_id.as_deref().filter(|id| !id.is_empty()) else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let row = state
            .users()
            .get_by_id(owner_id)
            .await
            .map_err(GqlError::from)?;

        Ok(row.map(User::from))
    }

    async fn staff(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<User>>>> {
        self.store_users(ctx).await
    }

    async fn clients(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<User>>>> {
        self.store_users(ctx).await
    }
}

impl Store {
    async fn store_users(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<User>>>> {
        let Some(store_id) = self.id.as_deref() else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let rows = state
            .stores()
            .list_users(store_id)
            .await
            .map_err(GqlError::from)?;

        Ok(rows.map(into_users))
    }
}

fn into_users(rows: Vec<Option<UserRecord>>) -> Vec<Option<User>> {
    rows.into_iter().map(|row| row.map(User::from)).collect()
}
