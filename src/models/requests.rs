use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /predict`
///
/// Age is kept as a wide integer so out-of-range values reach validation
/// instead of failing JSON decoding.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: i64,
    #[validate(length(min = 1, message = "Interest must not be empty"))]
    pub interest: String,
}
