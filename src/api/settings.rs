//! Site Settings Endpoints

use super::{get_json, post_unit, ApiResult};
use crate::models::SiteSettings;

/// `GET /api/site-settings`
pub async fn site_settings() -> ApiResult<SiteSettings> {
    get_json("/api/site-settings").await
}

/// `POST /api/site-settings`
pub async fn save_site_settings(settings: &SiteSettings) -> ApiResult<()> {
    post_unit("/api/site-settings", settings).await
}
