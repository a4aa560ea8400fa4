use async_graphql::MergedObject;

use crate::gql::domains::product_models::ProductModelQuery;
use crate::gql::domains::products::ProductQuery;
use crate::gql::domains::stores::StoreQuery;
use crate::gql::domains::traders::TraderQuery;
use crate::gql::domains::tradings::TradingQuery;
use crate::gql::domains::users::UserQuery;

#[derive(MergedObject, Default)]
#[graphql(name = "RootQueryType")]
pub struct QueryRoot(
    ProductModelQuery,
    ProductQuery,
    StoreQuery,
    TraderQuery,
    TradingQuery,
    UserQuery,
);
