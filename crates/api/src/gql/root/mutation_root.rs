use async_graphql::MergedObject;

use crate::gql::domains::product_models::ProductModelMutation;
use crate::gql::domains::products::ProductMutation;
use crate::gql::domains::stores::StoreMutation;
use crate::gql::domains::traders::TraderMutation;
use crate::gql::domains::tradings::TradingMutation;
use crate::gql::domains::users::UserMutation;

#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(
    ProductModelMutation,
    ProductMutation,
    StoreMutation,
    TraderMutation,
    TradingMutation,
    UserMutation,
);
