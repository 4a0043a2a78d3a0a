//! Catalogue handlers

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::AppState;

/// Versioned media type of the product list
pub const PRODUCTS_CONTENT_TYPE: &str = "application/vnd.eselpo.catalogue.products.v1+json";

/// GET /api/catalogue/products
pub async fn list_products(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, PRODUCTS_CONTENT_TYPE)],
        Json(state.product_catalogue.products().to_vec()),
    )
        .into_response()
}
