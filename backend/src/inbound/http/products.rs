//! Product and category HTTP handlers.
//!
//! ```text
//! POST   /products
//! GET    /products
//! GET    /products/{id}
//! PUT    /products/{id}
//! DELETE /products/{id}
//! GET    /products-list/{title}
//! GET    /products/p/{pageSize}/{pageNumber}
//! GET    /products/category/{categoryTitle}
//! GET    /products/categories
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::product::{
    Category, PageRequest, Product, ProductDraft, SortColumn, SortDirection,
};
use crate::domain::{Error, ProductPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for creating or updating a product.
///
/// Every field is optional: on create the missing ones fail validation, on
/// update they mean "leave unchanged".
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<String>,
}

/// Sorting parameters for the paged listing.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Column to sort by: `id`, `title`, `price`, or `createdOn`.
    pub sort_column: Option<String>,
    /// `desc` for descending; anything else sorts ascending.
    pub sort_direction: Option<String>,
}

fn draft_from_request(request: ProductRequest) -> Result<ProductDraft, Error> {
    ProductDraft::new(
        request.title.unwrap_or_default(),
        request.description,
        request.price,
        request.image,
        request.category.unwrap_or_default(),
    )
    .map_err(|err| Error::invalid_request(err.to_string()))
}

fn patch_from_request(request: ProductRequest) -> ProductPatch {
    ProductPatch {
        title: request.title,
        description: request.description,
        price: request.price,
        image_url: request.image,
        category_title: request.category,
    }
}

fn page_from_parts(page_size: u32, page_number: u32, query: &PageQuery) -> Result<PageRequest, Error> {
    let mut page = PageRequest::new(page_size, page_number);
    if let Some(column) = query.sort_column.as_deref() {
        let column = SortColumn::parse(column).map_err(|err| Error::internal(err.to_string()))?;
        let direction = query
            .sort_direction
            .as_deref()
            .map(SortDirection::parse)
            .unwrap_or_default();
        page = page.with_sort(column, direction);
    }
    Ok(page)
}

/// Create a product, creating its category on demand.
#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Created product", body = Product),
        (status = 400, description = "Invalid payload", body = Error),
        (status = 500, description = "Creation failed", body = Error)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
#[post("/products")]
pub async fn create_product(
    state: web::Data<HttpState>,
    payload: web::Json<ProductRequest>,
) -> ApiResult<web::Json<Product>> {
    let draft = draft_from_request(payload.into_inner())?;
    let created = state.catalogue.create_product(draft).await?;
    Ok(web::Json(created))
}

/// List every product.
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [Product]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Product>>> {
    Ok(web::Json(state.catalogue.list_products().await?))
}

/// Fetch one product by id.
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "No such product", body = Error)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<Product>> {
    Ok(web::Json(state.catalogue.get_product(*id).await?))
}

/// Search products whose title contains the given fragment.
#[utoipa::path(
    get,
    path = "/products-list/{title}",
    params(("title" = String, Path, description = "Title fragment")),
    responses(
        (status = 200, description = "Matching products", body = [Product]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "searchProducts"
)]
#[get("/products-list/{title}")]
pub async fn search_products(
    state: web::Data<HttpState>,
    title: web::Path<String>,
) -> ApiResult<web::Json<Vec<Product>>> {
    Ok(web::Json(
        state.catalogue.search_products_by_title(&title).await?,
    ))
}

/// Fetch one page of products, optionally sorted.
#[utoipa::path(
    get,
    path = "/products/p/{pageSize}/{pageNumber}",
    params(
        ("pageSize" = u32, Path, description = "Items per page"),
        ("pageNumber" = u32, Path, description = "Zero-based page number"),
        PageQuery
    ),
    responses(
        (status = 200, description = "One page of products", body = [Product]),
        (status = 500, description = "Unsupported sort column", body = Error)
    ),
    tags = ["products"],
    operation_id = "listProductsPaged"
)]
#[get("/products/p/{pageSize}/{pageNumber}")]
pub async fn list_products_paged(
    state: web::Data<HttpState>,
    path: web::Path<(u32, u32)>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Vec<Product>>> {
    let (page_size, page_number) = path.into_inner();
    let page = page_from_parts(page_size, page_number, &query)?;
    Ok(web::Json(state.catalogue.list_products_paged(page).await?))
}

/// List products in one category.
#[utoipa::path(
    get,
    path = "/products/category/{categoryTitle}",
    params(("categoryTitle" = String, Path, description = "Exact category title")),
    responses(
        (status = 200, description = "Products in the category", body = [Product]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "listProductsInCategory"
)]
#[get("/products/category/{categoryTitle}")]
pub async fn list_products_in_category(
    state: web::Data<HttpState>,
    title: web::Path<String>,
) -> ApiResult<web::Json<Vec<Product>>> {
    Ok(web::Json(
        state.catalogue.list_products_in_category(&title).await?,
    ))
}

/// List every category.
#[utoipa::path(
    get,
    path = "/products/categories",
    responses(
        (status = 200, description = "All categories", body = [Category]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "listCategories"
)]
#[get("/products/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Category>>> {
    Ok(web::Json(state.catalogue.list_categories().await?))
}

/// Merge a partial update into one product.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 404, description = "No such product", body = Error)
    ),
    tags = ["products"],
    operation_id = "updateProduct"
)]
#[put("/products/{id}")]
pub async fn update_product(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    payload: web::Json<ProductRequest>,
) -> ApiResult<web::Json<Product>> {
    let patch = patch_from_request(payload.into_inner());
    Ok(web::Json(state.catalogue.update_product(*id, patch).await?))
}

/// Delete one product and echo its id.
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Deleted product id", body = i64),
        (status = 404, description = "No such product", body = Error)
    ),
    tags = ["products"],
    operation_id = "deleteProduct"
)]
#[delete("/products/{id}")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<i64>> {
    Ok(web::Json(state.catalogue.delete_product(*id).await?))
}

#[cfg(test)]
#[path = "products_tests.rs"]
mod tests;
