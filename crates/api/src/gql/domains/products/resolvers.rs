use async_graphql::{Context, Object, Result};
use infra::repos::ProductData;

use crate::gql::error::GqlError;
use crate::state::AppState;

use super::types::Product;

#[derive(Default)]
pub struct ProductQuery;

#[Object]
impl ProductQuery {
    async fn product(&self, ctx: &Context<'_>, id: Option<String>) -> Result<Option<Product>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let state = ctx.data::<AppState>()?;

        let row = state.products().get_by_id(&id).await.map_err(GqlError::from)?;

        Ok(row.map(Product::from))
    }
}

#[derive(Default)]
pub struct ProductMutation;

#[Object]
impl ProductMutation {
    async fn add_product(
        &self,
        ctx: &Context<'_>,
        product_model_id: String,
        size: String,
        color: String,
        initial_volume: i32,
        restock_volume: i32,
        return_volume: i32,
        current_stock: i32,
        purchased_volume: i32,
        is_on_sale: bool,
    ) -> Result<Option<Product>> {
        let state = ctx.data::<AppState>()?;

        let data = ProductData {
            id: state.next_id(),
            product_model_id,
            size,
            color,
            initial_volume,
            restock_volume,
            return_volume,
            current_stock,
            purchased_volume,
            is_on_sale,
        };
        let row = state.products().create(data).await.map_err(GqlError::from)?;

        Ok(row.map(Product::from))
    }

    /// Replace every field of the product addressed by `id`.
    async fn edit_product(
        &self,
        ctx: &Context<'_>,
        id: String,
        product_model_id: String,
        size: String,
        color: String,
        initial_volume: i32,
        restock_volume: i32,
        return_volume: i32,
        current_stock: i32,
        purchased_volume: i32,
        is_on_sale: bool,
    ) -> Result<Option<Product>> {
        let state = ctx.data::<AppState>()?;

        let data = ProductData {
            id,
            product_model_id,
            size,
            color,
            initial_volume,
            restock_volume,
            return_volume,
            current_stock,
            purchased_volume,
            is_on_sale,
        };
        let row = state.products().update(data).await.map_err(GqlError::from)?;

        Ok(row.map(Product::from))
    }

    async fn delete_product(&self, ctx: &Context<'_>, id: String) -> Result<Option<Product>> {
        let state = ctx.data::<AppState>()?;

        let row = state.products().delete(&id).await.map_err(GqlError::from)?;

        Ok(row.map(Product::from))
    }
}
