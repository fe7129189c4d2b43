//! Shared response bodies for API handlers.
//!
//! Ledger records are returned bare (no envelope) because the web client
//! consumes them directly; only acknowledgements need a dedicated shape.

use serde::Serialize;

/// `{ "success": true }` acknowledgement for operations with no payload.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
