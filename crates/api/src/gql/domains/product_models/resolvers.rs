use async_graphql::{Context, Object, Result};
use infra::repos::{CreateProductModelData, UpdateProductModelData};

use crate::gql::error::GqlError;
use crate::state::AppState;

use super::types::ProductModel;

#[derive(Default)]
pub struct ProductModelQuery;

#[Object]
impl ProductModelQuery {
    async fn product_model(
        &self,
        ctx: &Context<'_>,
        id: Option<String>,
    ) -> Result<Option<ProductModel>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let row = state
            .product_models()
            .get_by_id(&id)
            .await
            .map_err(GqlError::from)?;

        Ok(row.map(ProductModel::from))
    }
}

#[derive(Default)]
pub struct ProductModelMutation;

#[Object]
impl ProductModelMutation {
    async fn add_product_model(
        &self,
        ctx: &Context<'_>,
        trader_id: Option<String>,
        store_id: String,
        season_date: Option<String>,
        #[graphql(name = "type")] kind: Option<String>,
        cost_price: Option<f64>,
        label_price: Option<f64>,
        disaccount: Option<f64>,
        selling_price: Option<f64>,
    ) -> Result<Option<ProductModel>> {
        let state = ctx.data::<AppState>()?;

        let data = CreateProductModelData {
            id: state.next_id(),
            trader_id,
            store_id,
            season_date,
            kind,
            cost_price,
            label_price,
            disaccount,
            selling_price,
        };
        let row = state
            .product_models()
            .create(data)
            .await
            .map_err(GqlError::from)?;

        Ok(row.map(ProductModel::from))
    }

    /// Patch the product model addressed by `id`.
    async fn edit_product_model(
        &self,
        ctx: &Context<'_>,
        id: String,
        trader_id: Option<String>,
        store_id: String,
        season_date: Option<String>,
        #[graphql(name = "type")] kind: Option<String>,
        cost_price: Option<f64>,
        label_price: Option<f64>,
        disaccount: Option<f64>,
        selling_price: Option<f64>,
    ) -> Result<Option<ProductModel>> {
        let state = ctx.data::<AppState>()?;

        let data = UpdateProductModelData {
            id,
            trader_id,
            store_id,
            season_date,
            kind,
            cost_price,
            label_price,
            disaccount,
            selling_price,
        };
        let row = state
            .product_models()
            .update(data)
            .await
            .map_err(GqlError::from)?;

        Ok(row.map(ProductModel::from))
    }

    async fn delete_product_model(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> Result<Option<ProductModel>> {
        let state = ctx.data::<AppState>()?;

        let row = state
            .product_models()
            .delete(&id)
            .await
            .map_err(GqlError::from)?;

        Ok(row.map(ProductModel::from))
    }
}
