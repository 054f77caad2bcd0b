mod health;
mod not_found;
mod submit_form;

pub use health::*;
pub use not_found::*;
pub use submit_form::*;

/// The response envelope shared by every endpoint except the health check:
/// `{"success": ..., "message": ...}`.
#[derive(serde::Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
