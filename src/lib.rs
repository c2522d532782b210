//! Gift Predictor - birthday gift suggestions from a static catalog
//!
//! Maps an age and a stated interest to a canned gift suggestion and a fixed
//! confidence score. The catalog is loaded once at startup and shared
//! read-only with the HTTP handlers.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Catalog, CatalogError, Predictor, PredictorOptions, PredictError};
pub use crate::models::{Prediction, PredictionRequest, PredictRequest, PredictResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let predictor = Predictor::unavailable("no catalog");
        assert!(!predictor.is_loaded());
    }
}
