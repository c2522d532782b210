// Integration tests for Gift Predictor

use actix_web::{http::StatusCode, test, web, App};
use gift_predictor::core::{Catalog, Predictor, PredictorOptions};
use gift_predictor::models::{ErrorResponse, HealthResponse, InterestsResponse, PredictResponse};
use gift_predictor::routes::{configure_routes, handle_json_payload_error, AppState};
use serde_json::json;

fn loaded_state() -> AppState {
    let catalog = Catalog::from_json_str(
        r#"{
            "gifts_by_age": {"30": "A gaming mouse"},
            "interests": {"gaming": "Tech & Gaming", "reading": "Books & Literature"}
        }"#,
    )
    .unwrap();
    AppState::new(Predictor::from_catalog(catalog, PredictorOptions::default()))
}

fn unavailable_state() -> AppState {
    AppState::new(Predictor::unavailable("Catalog file not found at models/model.json"))
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_predict_success() {
    let app = init_app!(loaded_state());

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({"age": 30, "interest": "Gaming"}))
        .to_request();
    let resp: PredictResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.predicted_gift, "A gaming mouse related to Tech & Gaming.");
    assert_eq!(resp.suggested_category, "Tech & Gaming");
    assert_eq!(resp.confidence_score, Some(0.85));
}

#[actix_web::test]
async fn test_predict_trailing_slash() {
    let app = init_app!(loaded_state());

    let req = test::TestRequest::post()
        .uri("/predict/")
        .set_json(json!({"age": 12, "interest": "reading"}))
        .to_request();
    let resp: PredictResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.predicted_gift, "A thoughtful surprise related to Books & Literature.");
}

#[actix_web::test]
async fn test_predict_age_out_of_range() {
    let app = init_app!(loaded_state());

    for age in [0, 121, -3] {
        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(json!({"age": age, "interest": "gaming"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "age {}", age);
    }
}

#[actix_web::test]
async fn test_predict_unknown_interest() {
    let app = init_app!(loaded_state());

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({"age": 30, "interest": "knitting"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.status_code, 400);
    assert!(body.message.contains("gaming, reading"));
}

#[actix_web::test]
async fn test_predict_non_alphanumeric_interest() {
    let app = init_app!(loaded_state());

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({"age": 30, "interest": "<script>"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_predict_malformed_json() {
    let app = init_app!(loaded_state());

    let req = test::TestRequest::post()
        .uri("/predict")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"age\": \"thirty\"")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
}

#[actix_web::test]
async fn test_predict_unavailable() {
    let app = init_app!(unavailable_state());

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({"age": 30, "interest": "gaming"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_home_lists_interests() {
    let app = init_app!(loaded_state());

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let page = String::from_utf8(body.to_vec()).unwrap();
    assert!(page.contains("<li>gaming</li>"));
    assert!(page.contains("<li>reading</li>"));
}

#[actix_web::test]
async fn test_home_unavailable() {
    let app = init_app!(unavailable_state());

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[actix_web::test]
async fn test_interests_endpoint() {
    let app = init_app!(loaded_state());

    let req = test::TestRequest::get().uri("/interests").to_request();
    let resp: InterestsResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.interests, vec!["gaming".to_string(), "reading".to_string()]);
}

#[actix_web::test]
async fn test_health_reports_degraded() {
    let app = init_app!(unavailable_state());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.status, "degraded");
    assert!(!resp.catalog_loaded);
    assert_eq!(resp.interests, 0);
}

#[actix_web::test]
async fn test_health_reports_healthy() {
    let app = init_app!(loaded_state());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.status, "healthy");
    assert!(resp.catalog_loaded);
    assert_eq!(resp.interests, 2);
}

#[actix_web::test]
async fn test_input_errors_share_one_label() {
    let app = init_app!(loaded_state());

    for body in [
        json!({"age": 0, "interest": "gaming"}),
        json!({"age": 30, "interest": ""}),
        json!({"age": 30, "interest": "knitting"}),
        json!({"age": 30, "interest": "gam!ng"}),
    ] {
        let req = test::TestRequest::post().uri("/predict").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", body);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.error, "Invalid input", "{}", body);
    }
}

#[actix_web::test]
async fn test_mixed_case_catalog_key_keeps_category() {
    let catalog = Catalog::from_json_str(
        r#"{"gifts_by_age": {"30": "A gaming mouse"}, "interests": {"Reading": "Books & Literature"}}"#,
    )
    .unwrap();
    let app = init_app!(AppState::new(Predictor::from_catalog(catalog, PredictorOptions::default())));

    let req = test::TestRequest::post()
        .uri("/predict")
        .set_json(json!({"age": 30, "interest": "Reading"}))
        .to_request();
    let resp: PredictResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.predicted_gift, "A gaming mouse related to Books & Literature.");
    assert_eq!(resp.suggested_category, "Books & Literature");
}
