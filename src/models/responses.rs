use serde::{Deserialize, Serialize};
use crate::models::domain::Prediction;

/// Response for the predict endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predicted_gift: String,
    pub suggested_category: String,
    pub confidence_score: Option<f64>,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            predicted_gift: prediction.gift,
            suggested_category: prediction.category,
            confidence_score: Some(prediction.confidence),
        }
    }
}

/// Valid interests listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestsResponse {
    pub interests: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog_loaded: bool,
    pub interests: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
