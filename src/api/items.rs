//! Item Endpoints
//!
//! Catalog reads plus the authenticated item writes, including the batch
//! display-order update used by arranging mode.

use serde::Serialize;

use super::{encode_segment, get_json, post_json, post_unit, ApiResult};
use crate::models::{ItemDraft, OrderUpdate, PortfolioItem};

#[derive(Serialize)]
struct UpdateOrderArgs<'a> {
    items: &'a [OrderUpdate],
}

/// `GET /api/items`
pub async fn list_items() -> ApiResult<Vec<PortfolioItem>> {
    get_json("/api/items").await
}

/// `GET /api/items/category/:slug`
pub async fn list_items_by_category(slug: &str) -> ApiResult<Vec<PortfolioItem>> {
    get_json(&format!("/api/items/category/{}", encode_segment(slug))).await
}

/// `GET /api/items/author/:name`
pub async fn list_items_by_author(name: &str) -> ApiResult<Vec<PortfolioItem>> {
    get_json(&format!("/api/items/author/{}", encode_segment(name))).await
}

/// `POST /api/items`
pub async fn create_item(draft: &ItemDraft) -> ApiResult<PortfolioItem> {
    post_json("/api/items", draft).await
}

/// `POST /api/items/:id`
pub async fn update_item(id: u32, draft: &ItemDraft) -> ApiResult<PortfolioItem> {
    post_json(&format!("/api/items/{}", id), draft).await
}

/// `POST /api/items/:id/delete`
pub async fn delete_item(id: u32) -> ApiResult<()> {
    post_unit(&format!("/api/items/{}/delete", id), &serde_json::json!({})).await
}

/// `POST /api/items/update-order` with `{ items: [{ id, displayOrder }] }`.
/// One write for the whole batch.
pub async fn update_order(items: &[OrderUpdate]) -> ApiResult<()> {
    post_unit("/api/items/update-order", &UpdateOrderArgs { items }).await
}
