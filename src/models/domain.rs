use serde::{Deserialize, Serialize};

/// Prediction input that has passed validation
///
/// `interest` is already trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: u8,
    pub interest: String,
}

/// Outcome of a catalog lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub gift: String,
    pub category: String,
    pub confidence: f64,
}

impl Prediction {
    /// Tuple form: (gift text, category text, confidence)
    pub fn into_parts(self) -> (String, String, f64) {
        (self.gift, self.category, self.confidence)
    }
}
