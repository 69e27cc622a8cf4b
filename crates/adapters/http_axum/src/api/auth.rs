//! Login placeholder.
//!
//! There is no session or credential handling yet; the endpoint exists so
//! clients can be wired against it.

use axum::Json;
use serde::Serialize;

/// Empty JSON object.
#[derive(Serialize)]
pub struct LoginResponse {}

/// `POST /login`: accepts any body and always answers `{}`.
pub async fn login() -> Json<LoginResponse> {
    tracing::debug!("login called; authentication is not implemented");
    Json(LoginResponse {})
}
