//! Share Link Endpoint
//!
//! Public, read-only view of a single item behind an opaque share code.

use super::{encode_segment, get_json, ApiResult};
use crate::models::ShareView;

/// `GET /api/share/:shareCode`
pub async fn share_view(share_code: &str) -> ApiResult<ShareView> {
    get_json(&format!("/api/share/{}", encode_segment(share_code))).await
}
