use crate::core::predictor::PredictError;
use crate::models::{PredictRequest, PredictionRequest};

pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 120;

/// Check that an age is within 1..=120
pub fn validate_age(age: i64) -> Result<u8, PredictError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(PredictError::InvalidInput(format!(
            "Age must be between {} and {}",
            MIN_AGE, MAX_AGE
        )));
    }

    u8::try_from(age).map_err(|_| {
        PredictError::InvalidInput(format!("Age must be between {} and {}", MIN_AGE, MAX_AGE))
    })
}

/// Interest may only contain letters, digits and spaces
pub fn validate_interest_charset(interest: &str) -> Result<(), PredictError> {
    let mut chars = interest.chars().filter(|c| *c != ' ').peekable();

    if chars.peek().is_none() || !chars.all(char::is_alphanumeric) {
        return Err(PredictError::InvalidInput(
            "Field: interest must be alphanumeric".to_string(),
        ));
    }

    Ok(())
}

#[inline]
pub fn normalize_interest(interest: &str) -> String {
    interest.trim().to_lowercase()
}

/// Interest must be one of the enumerated values (already normalized)
pub fn validate_interest_member(
    interest: &str,
    valid_interests: &[String],
) -> Result<(), PredictError> {
    if valid_interests.iter().any(|valid| valid == interest) {
        Ok(())
    } else {
        Err(PredictError::InvalidInput(format!(
            "Invalid interest. Must be one of: {}",
            valid_interests.join(", ")
        )))
    }
}

/// Validate an interest end to end and return its normalized form
pub fn validate_interest(interest: &str, valid_interests: &[String]) -> Result<String, PredictError> {
    let normalized = normalize_interest(interest);
    validate_interest_charset(&normalized)?;
    validate_interest_member(&normalized, valid_interests)?;
    Ok(normalized)
}

/// Turn a raw request body into a validated prediction request
pub fn validate_request(
    req: &PredictRequest,
    valid_interests: &[String],
) -> Result<PredictionRequest, PredictError> {
    let age = validate_age(req.age)?;
    let interest = validate_interest(&req.interest, valid_interests)?;

    Ok(PredictionRequest { age, interest })
}
