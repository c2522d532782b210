// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Prediction, PredictionRequest};
pub use requests::PredictRequest;
pub use responses::{PredictResponse, InterestsResponse, HealthResponse, ErrorResponse};
