use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_categories::GetProductCategoriesUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductCategoryResponse, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    get_categories_use_case: Arc<dyn GetProductCategoriesUseCase>,
    get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        get_categories_use_case: Arc<dyn GetProductCategoriesUseCase>,
        get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            get_categories_use_case,
            get_by_category_use_case,
        }
    }
}

/// Product catalog API
///
/// Read-only endpoints over products and their categories.
#[OpenApi]
impl ProductApi {
    /// List all products
    #[oai(path = "/api/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all(&self) -> GetProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => GetProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductsResponse::NotFound(json),
                    _ => GetProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by id
    #[oai(path = "/api/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_by_id(&self, id: Path<i32>) -> GetProductResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductResponse::NotFound(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List product categories
    #[oai(
        path = "/api/product-categories",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_categories(&self) -> GetCategoriesResponse {
        match self.get_categories_use_case.execute().await {
            Ok(categories) => GetCategoriesResponse::Ok(Json(
                categories
                    .into_iter()
                    .map(ProductCategoryResponse::from)
                    .collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCategoriesResponse::InternalError(json)
            }
        }
    }

    /// List the products of a category
    #[oai(
        path = "/api/product-categories/:id/products",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_by_category(&self, id: Path<i32>) -> GetProductsResponse {
        match self
            .get_by_category_use_case
            .execute(GetProductsByCategoryParams { category_id: id.0 })
            .await
        {
            Ok(products) => GetProductsResponse::Ok(Json(
                products.into_iter().map(ProductResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductsResponse::NotFound(json),
                    _ => GetProductsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductCategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
