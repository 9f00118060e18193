use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::UserId;
use business::domain::shopping_cart::use_cases::add_item::{
    AddCartItemParams, AddCartItemUseCase,
};
use business::domain::shopping_cart::use_cases::delete_item::{
    DeleteCartItemParams, DeleteCartItemUseCase,
};
use business::domain::shopping_cart::use_cases::get_item::{
    GetCartItemParams, GetCartItemUseCase,
};
use business::domain::shopping_cart::use_cases::get_items::{
    GetCartItemsParams, GetCartItemsUseCase,
};
use business::domain::shopping_cart::use_cases::update_qty::{
    UpdateCartItemQtyParams, UpdateCartItemQtyUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::shopping_cart::dto::{
    AddCartItemRequest, CartItemResponse, UpdateCartItemQtyRequest,
};
use crate::api::tags::ApiTags;

pub struct ShoppingCartApi {
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    get_item_use_case: Arc<dyn GetCartItemUseCase>,
    get_items_use_case: Arc<dyn GetCartItemsUseCase>,
    update_qty_use_case: Arc<dyn UpdateCartItemQtyUseCase>,
    delete_item_use_case: Arc<dyn DeleteCartItemUseCase>,
}

impl ShoppingCartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        get_item_use_case: Arc<dyn GetCartItemUseCase>,
        get_items_use_case: Arc<dyn GetCartItemsUseCase>,
        update_qty_use_case: Arc<dyn UpdateCartItemQtyUseCase>,
        delete_item_use_case: Arc<dyn DeleteCartItemUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            get_item_use_case,
            get_items_use_case,
            update_qty_use_case,
            delete_item_use_case,
        }
    }
}

/// Shopping cart API
///
/// Endpoints for reading and changing the items of a user's cart.
#[OpenApi]
impl ShoppingCartApi {
    /// List the cart items of a user
    ///
    /// Returns every item of the carts owned by the user, in no particular order.
    #[oai(
        path = "/api/users/:user_id/shopping-cart",
        method = "get",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn get_items(&self, user_id: Path<i32>) -> GetCartItemsResponse {
        let params = GetCartItemsParams {
            user_id: UserId::new(user_id.0),
        };

        match self.get_items_use_case.execute(params).await {
            Ok(items) => GetCartItemsResponse::Ok(Json(
                items.into_iter().map(CartItemResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartItemsResponse::InternalError(json)
            }
        }
    }

    /// Get a cart item
    #[oai(
        path = "/api/shopping-cart/:id",
        method = "get",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn get_item(&self, id: Path<i32>) -> CartItemResult {
        match self
            .get_item_use_case
            .execute(GetCartItemParams { id: id.0 })
            .await
        {
            Ok(item) => CartItemResult::Ok(Json(item.into())),
            Err(err) => CartItemResult::from_error(err.into_error_response()),
        }
    }

    /// Add a product to a cart
    ///
    /// Answers 204 without creating anything when the cart already holds the
    /// product or the product does not exist.
    #[oai(
        path = "/api/shopping-cart",
        method = "post",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn add_item(&self, body: Json<AddCartItemRequest>) -> AddCartItemResponse {
        let params = AddCartItemParams {
            cart_id: body.0.cart_id,
            product_id: body.0.product_id,
            qty: body.0.qty,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(Some(item)) => AddCartItemResponse::Created(Json(item.into())),
            Ok(None) => AddCartItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCartItemResponse::BadRequest(json),
                    404 => AddCartItemResponse::NotFound(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update the quantity of a cart item
    #[oai(
        path = "/api/shopping-cart/:id",
        method = "patch",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn update_qty(
        &self,
        id: Path<i32>,
        body: Json<UpdateCartItemQtyRequest>,
    ) -> CartItemResult {
        let params = UpdateCartItemQtyParams {
            id: id.0,
            qty: body.0.qty,
        };

        match self.update_qty_use_case.execute(params).await {
            Ok(item) => CartItemResult::Ok(Json(item.into())),
            Err(err) => CartItemResult::from_error(err.into_error_response()),
        }
    }

    /// Remove an item from its cart
    ///
    /// Returns the item as it was before deletion.
    #[oai(
        path = "/api/shopping-cart/:id",
        method = "delete",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn delete_item(&self, id: Path<i32>) -> CartItemResult {
        match self
            .delete_item_use_case
            .execute(DeleteCartItemParams { id: id.0 })
            .await
        {
            Ok(item) => CartItemResult::Ok(Json(item.into())),
            Err(err) => CartItemResult::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 201)]
    Created(Json<CartItemResponse>),
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Response shared by the single-item endpoints (get, update, delete).
#[derive(poem_openapi::ApiResponse)]
pub enum CartItemResult {
    #[oai(status = 200)]
    Ok(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartItemResult {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(json),
            404 => Self::NotFound(json),
            _ => Self::InternalError(json),
        }
    }
}
