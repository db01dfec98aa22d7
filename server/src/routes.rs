//! Route handlers.
//!
//! | Route          | Success                     | Failure     |
//! |----------------|-----------------------------|-------------|
//! | `GET /`        | all items                   |             |
//! | `POST /`       | the created items           | 400         |
//! | `PATCH /{id}`  | the updated item            | 400, 404    |
//! | `DELETE /{id}` | `[id]`                      | 404         |

use axum::{
    extract::{Path, State},
    Json,
};
use todo_core::{make_items, CreateItems, ItemId, ItemPatch, TodoItem};

use crate::error::{AppError, JsonBody};
use crate::SharedList;

/// A path segment that does not parse as an id cannot name a stored item.
fn parse_id(raw: &str) -> Result<ItemId, AppError> {
    raw.parse().map_err(|_| AppError::NotFound(raw.to_string()))
}

#[tracing::instrument(skip_all)]
pub async fn list_items(State(list): State<SharedList>) -> Json<Vec<TodoItem>> {
    let items = list.read().await.list();
    Json(items)
}

#[tracing::instrument(skip_all)]
pub async fn create_items(
    State(list): State<SharedList>,
    JsonBody(input): JsonBody<CreateItems>,
) -> Result<Json<Vec<TodoItem>>, AppError> {
    let items = make_items(input.items);
    list.write()
        .await
        .add_items(items.clone())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    tracing::debug!(count = items.len(), "items created");
    Ok(Json(items))
}

#[tracing::instrument(skip(list, patch))]
pub async fn update_item(
    State(list): State<SharedList>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ItemPatch>,
) -> Result<Json<TodoItem>, AppError> {
    if patch.is_empty() {
        return Err(AppError::BadRequest("empty patch".to_string()));
    }
    let item_id = parse_id(&id)?;
    let updated = list.write().await.update_item(&item_id, patch);
    updated.map(Json).ok_or(AppError::NotFound(id))
}

#[tracing::instrument(skip(list))]
pub async fn delete_item(
    State(list): State<SharedList>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ItemId>>, AppError> {
    let item_id = parse_id(&id)?;
    let removed = list.write().await.remove_items(&[item_id]);
    if removed.len() != 1 {
        return Err(AppError::NotFound(id));
    }
    Ok(Json(removed))
}
