// Core lookup exports
pub mod catalog;
pub mod predictor;
pub mod validation;

pub use catalog::{Catalog, CatalogError};
pub use predictor::{Predictor, PredictorOptions, PredictError};
pub use validation::{validate_age, validate_interest, validate_request, normalize_interest};
