use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::PredictError;
use crate::models::{ErrorResponse, InterestsResponse, PredictRequest, PredictResponse, Prediction};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/predict", web::post().to(predict))
        .route("/predict/", web::post().to(predict))
        .route("/interests", web::get().to(list_interests));
}

fn invalid_input(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid input".to_string(),
        message,
        status_code: 400,
    })
}

fn unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(ErrorResponse {
        error: "Service unavailable".to_string(),
        message: PredictError::Unavailable.to_string(),
        status_code: 503,
    })
}

/// Predict endpoint
///
/// POST /predict
///
/// Request body:
/// ```json
/// {
///   "age": 30,
///   "interest": "gaming"
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    if !state.predictor.is_loaded() {
        tracing::warn!("Rejecting prediction: catalog not loaded");
        return unavailable();
    }

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request: field_errors={:?}", errors);
        return invalid_input(errors.to_string());
    }

    match state.predictor.predict(req.age, &req.interest) {
        Ok((gift, category, confidence)) => {
            tracing::debug!("Predicted for age {} / {}: {}", req.age, req.interest, gift);
            HttpResponse::Ok().json(PredictResponse::from(Prediction {
                gift,
                category,
                confidence,
            }))
        }
        Err(PredictError::Unavailable) => unavailable(),
        Err(PredictError::InvalidInput(message)) => {
            tracing::info!("Rejected predict request: {}", message);
            invalid_input(message)
        }
    }
}

/// Accepted interests as JSON
///
/// GET /interests
async fn list_interests(state: web::Data<AppState>) -> impl Responder {
    if !state.predictor.is_loaded() {
        return unavailable();
    }

    HttpResponse::Ok().json(InterestsResponse {
        interests: state.predictor.get_valid_interests().to_vec(),
    })
}
