use async_graphql::SimpleObject;
use infra::models::UserRecord;

#[derive(SimpleObject, Clone, Debug, PartialEq)]
pub struct User {
    pub id: Option<String>,
    pub username: Option<String>,
    pub store_id: Option<String>,
}

impl From<UserRecord> for User {
    fn from(row: UserRecord) -> Self {
        Self {
            id: row.id,
            username: row.username,
            store_id: row.store_id,
        }
    }
}
