use axum::{
    Router,
    extract::State,
    routing::get,
};
use axum_helpers::{
    Created, DataResponse, Validated,
    errors::responses::{InternalServerErrorResponse, InvalidJsonResponse, ValidationErrorsResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{NotFoundBody, ProductNotFoundResponse, ProductResult};
use crate::models::{CreateProduct, Product, ReplaceProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::{ProductPath, ReplaceProductRequest};

const TAG: &str = "Products";

/// Message returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Producto eliminado";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        replace_product,
        toggle_availability,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, ReplaceProduct, NotFoundBody),
        responses(
            ProductNotFoundResponse,
            ValidationErrorsResponse,
            InvalidJsonResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(replace_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Products ordered by id", body = DataResponse<Vec<Product>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<DataResponse<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(DataResponse::new(products))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = DataResponse<Product>),
        (status = 400, response = ValidationErrorsResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ProductPath { id }): Validated<ProductPath>,
) -> ProductResult<DataResponse<Product>> {
    let product = service.get_product(id).await?;
    Ok(DataResponse::new(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = DataResponse<Product>),
        (status = 400, response = ValidationErrorsResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(input): Validated<CreateProduct>,
) -> ProductResult<Created<Product>> {
    let product = service.create_product(input).await?;
    Ok(Created(product))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ReplaceProduct,
    responses(
        (status = 200, description = "Product replaced", body = DataResponse<Product>),
        (status = 400, response = ValidationErrorsResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ReplaceProductRequest { id, input }): Validated<ReplaceProductRequest>,
) -> ProductResult<DataResponse<Product>> {
    let product = service.replace_product(id, input).await?;
    Ok(DataResponse::new(product))
}

/// Toggle product availability
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Availability flipped", body = DataResponse<Product>),
        (status = 400, response = ValidationErrorsResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ProductPath { id }): Validated<ProductPath>,
) -> ProductResult<DataResponse<Product>> {
    let product = service.toggle_availability(id).await?;
    Ok(DataResponse::new(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DataResponse<String>,
            example = json!({ "data": "Producto eliminado" })),
        (status = 400, response = ValidationErrorsResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Validated(ProductPath { id }): Validated<ProductPath>,
) -> ProductResult<DataResponse<&'static str>> {
    service.delete_product(id).await?;
    Ok(DataResponse::new(DELETED_MESSAGE))
}
