use serde::{Deserialize, Serialize};

/// Successful plan response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlanResponse {
    pub success: bool,
    pub routine: String,
    pub nutrition: String,
}

impl GeneratePlanResponse {
    pub fn new(routine: String, nutrition: String) -> Self {
        Self {
            success: true,
            routine,
            nutrition,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub version: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
