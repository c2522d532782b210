use crate::core::catalog::Catalog;
use crate::core::validation::validate_request;
use crate::models::{PredictRequest, Prediction, PredictionRequest};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_GIFT: &str = "A thoughtful surprise";
pub const DEFAULT_CATEGORY: &str = "General Interest";
pub const UNIQUE_SURPRISE: &str = "A very special and unique surprise, just for you!";
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

/// Errors returned by [`Predictor::predict`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("Model not loaded. Service unavailable.")]
    Unavailable,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Tunables applied when building a predictor
#[derive(Debug, Clone)]
pub struct PredictorOptions {
    /// Fixed confidence attached to every prediction
    pub confidence: f64,
    /// Pinned set of accepted interests; `None` accepts the catalog's keys
    pub allowed_interests: Option<Vec<String>>,
}

impl Default for PredictorOptions {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            allowed_interests: None,
        }
    }
}

/// Gift predictor over a static catalog
///
/// Built once at startup and shared read-only between workers. A predictor
/// whose catalog failed to load stays usable as a value but rejects every
/// prediction with [`PredictError::Unavailable`].
#[derive(Debug, Clone)]
pub struct Predictor {
    catalog: Option<Arc<Catalog>>,
    valid_interests: Vec<String>,
    confidence: f64,
    load_error: Option<String>,
}

impl Predictor {
    pub fn from_catalog(catalog: Catalog, options: PredictorOptions) -> Self {
        let source: Vec<String> = match options.allowed_interests {
            Some(pinned) => pinned,
            None => catalog.interests().keys().cloned().collect(),
        };

        let mut valid_interests: Vec<String> = source
            .iter()
            .map(|interest| interest.trim().to_lowercase())
            .filter(|interest| !interest.is_empty())
            .collect();
        valid_interests.sort();
        valid_interests.dedup();

        let confidence = if options.confidence.is_finite() {
            options.confidence.clamp(0.0, 1.0)
        } else {
            tracing::warn!(
                "Ignoring non-finite confidence {}, using {}",
                options.confidence,
                DEFAULT_CONFIDENCE
            );
            DEFAULT_CONFIDENCE
        };

        Self {
            catalog: Some(Arc::new(catalog)),
            valid_interests,
            confidence,
            load_error: None,
        }
    }

    /// A predictor with no catalog, carrying the reason it is unavailable
    pub fn unavailable(diagnostic: impl Into<String>) -> Self {
        Self {
            catalog: None,
            valid_interests: Vec::new(),
            confidence: DEFAULT_CONFIDENCE,
            load_error: Some(diagnostic.into()),
        }
    }

    /// Load the catalog at `path`
    ///
    /// Never fails: a missing or malformed file yields an unavailable
    /// predictor and the diagnostic is logged.
    pub async fn from_path<P: AsRef<Path>>(path: P, options: PredictorOptions) -> Self {
        let path = path.as_ref();

        match Catalog::load(path).await {
            Ok(catalog) => {
                tracing::info!(
                    "Successfully loaded catalog from {} ({} ages, {} interests)",
                    path.display(),
                    catalog.gifts_by_age().len(),
                    catalog.interests().len()
                );
                Self::from_catalog(catalog, options)
            }
            Err(e) => {
                tracing::error!("Failed to load catalog from {}: {}", path.display(), e);
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    /// Accepted interest values, lower-cased and sorted
    pub fn get_valid_interests(&self) -> &[String] {
        &self.valid_interests
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Predict a gift for a raw age and interest
    ///
    /// Returns `(gift, category, confidence)`.
    pub fn predict(&self, age: i64, interest: &str) -> Result<(String, String, f64), PredictError> {
        if !self.is_loaded() {
            return Err(PredictError::Unavailable);
        }

        let raw = PredictRequest {
            age,
            interest: interest.to_string(),
        };
        let request = validate_request(&raw, &self.valid_interests)?;

        self.lookup(&request).map(Prediction::into_parts)
    }

    /// Look up an already validated request
    pub fn lookup(&self, request: &PredictionRequest) -> Result<Prediction, PredictError> {
        let catalog = self.catalog.as_ref().ok_or(PredictError::Unavailable)?;

        let gift = catalog.gift_for_age(request.age);
        let category = catalog.category_for(&request.interest);

        let text = match (gift, category) {
            (None, None) => UNIQUE_SURPRISE.to_string(),
            (gift, category) => format!(
                "{} related to {}.",
                gift.unwrap_or(DEFAULT_GIFT),
                category.unwrap_or(DEFAULT_CATEGORY)
            ),
        };

        Ok(Prediction {
            gift: text,
            category: category.unwrap_or(DEFAULT_CATEGORY).to_string(),
            confidence: self.confidence,
        })
    }
}
