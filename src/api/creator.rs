//! Creator Endpoints
//!
//! The creator dashboard: a creator manages their own items and profile.

use super::{get_json, post_unit, ApiResult};
use crate::models::{CreatorProfile, PortfolioItem};

/// `GET /api/creator/items` - items owned by the signed-in creator
pub async fn creator_items() -> ApiResult<Vec<PortfolioItem>> {
    get_json("/api/creator/items").await
}

/// `POST /api/creator/profile`
pub async fn save_creator_profile(profile: &CreatorProfile) -> ApiResult<()> {
    post_unit("/api/creator/profile", profile).await
}
