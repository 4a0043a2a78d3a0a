//! Book handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::entities::Book;
use crate::error::AppError;
use crate::AppState;

/// GET /api/books
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.book_service.find_all().to_vec())
}

/// GET /api/books/:id
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, AppError> {
    let book = state.book_service.find_one(id)?;
    Ok(Json(book.clone()))
}
