//! Shared response payload types for API handlers.

use serde::Serialize;

/// `{ "success": true }` acknowledgement for delete operations.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
