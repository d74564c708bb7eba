//! Shared API request/response types
//!
//! Every JSON body produced by the service carries a `success` flag. Failed
//! requests use [`ErrorResponse`]; successful payloads are defined next to the
//! handlers that produce them.

use serde::{Deserialize, Serialize};

// ========================================
// Error Response Types
// ========================================

/// Error body returned with any non-2xx status
///
/// # Examples
///
/// ```
/// use flyq_common::api::types::ErrorResponse;
///
/// let body = ErrorResponse::new("Flight not found");
/// assert!(!body.success);
/// assert_eq!(body.error, "Flight not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,

    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

// ========================================
// Health Types
// ========================================

/// Health check response: status, module name, and version
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

impl HealthResponse {
    pub fn ok(module: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            module: module.to_string(),
            version: version.to_string(),
        }
    }
}
