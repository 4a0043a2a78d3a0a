//! List handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub item: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemCountResponse {
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListSizeResponse {
    pub size: usize,
}

/// GET /api/list
pub async fn item_count(State(state): State<AppState>) -> Json<ItemCountResponse> {
    Json(ItemCountResponse {
        count: state.list_manager.item_count(),
    })
}

/// POST /api/list
pub async fn add_item(
    State(state): State<AppState>,
    Json(request): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<ItemCountResponse>), AppError> {
    let item = request.item.trim();
    if item.is_empty() {
        return Err(AppError::BadRequest("item must not be empty".to_string()));
    }

    state.list_manager.add_item(item);
    Ok((
        StatusCode::CREATED,
        Json(ItemCountResponse {
            count: state.list_manager.item_count(),
        }),
    ))
}

/// POST /api/list/size
///
/// Size of the list in the request body; nothing is stored.
pub async fn list_size(
    State(state): State<AppState>,
    Json(list): Json<Vec<String>>,
) -> Json<ListSizeResponse> {
    Json(ListSizeResponse {
        size: state.list_manager.get_list_size(&list),
    })
}
