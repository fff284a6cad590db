//! Author Endpoints
//!
//! Authors are an aggregated backend view; the client only reads them.

use super::{get_json, ApiResult};
use crate::models::Author;

/// `GET /api/authors`
pub async fn list_authors() -> ApiResult<Vec<Author>> {
    get_json("/api/authors").await
}
