//! Auth Endpoints
//!
//! Session reads and login/logout writes. The session itself lives in a
//! cookie managed by the backend; the client only ever asks "who am I".

use serde::Serialize;

use super::{get_json, post_unit, ApiResult};
use crate::models::AuthUser;

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

/// `GET /api/auth/me`. A 401 means "nobody is signed in" and is not an error.
pub async fn current_user() -> ApiResult<Option<AuthUser>> {
    match get_json::<AuthUser>("/api/auth/me").await {
        Ok(user) => Ok(Some(user)),
        Err(err) if err.is_unauthorized() => Ok(None),
        Err(err) => Err(err),
    }
}

/// `POST /api/auth/login`. The refreshed user is read back through the
/// session key afterwards, so the response body is not interpreted here.
pub async fn login(username: &str, password: &str) -> ApiResult<()> {
    post_unit("/api/auth/login", &LoginArgs { username, password }).await
}

/// `POST /api/auth/logout`
pub async fn logout() -> ApiResult<()> {
    post_unit("/api/auth/logout", &serde_json::json!({})).await
}
