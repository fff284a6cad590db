//! Contact Endpoint

use super::{post_unit, ApiResult};
use crate::models::ContactMessage;

/// `POST /api/contact`. Delivery (email) is the backend's concern.
pub async fn send_contact(message: &ContactMessage) -> ApiResult<()> {
    post_unit("/api/contact", message).await
}
