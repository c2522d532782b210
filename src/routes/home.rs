use actix_web::{web, HttpResponse, Responder};
use crate::models::{ErrorResponse, HealthResponse};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(home))
        .route("/health", web::get().to(health_check));
}

/// Landing page listing the accepted interests
///
/// GET /
async fn home(state: web::Data<AppState>) -> impl Responder {
    if !state.predictor.is_loaded() {
        return HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: "Service unavailable".to_string(),
            message: "Model not loaded. Service unavailable.".to_string(),
            status_code: 503,
        });
    }

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_home(state.predictor.get_valid_interests()))
}

/// Health check endpoint
///
/// Reports `degraded` while the catalog is missing; the process itself is
/// still up, so this is always 200.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let loaded = state.predictor.is_loaded();
    let status = if loaded { "healthy" } else { "degraded" };

    if let Some(reason) = state.predictor.load_error() {
        tracing::debug!("Health check while catalog unavailable: {}", reason);
    }

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog_loaded: loaded,
        interests: state.predictor.get_valid_interests().len(),
        timestamp: chrono::Utc::now(),
    })
}

pub fn render_home(interests: &[String]) -> String {
    let items: String = interests
        .iter()
        .map(|interest| format!("                <li>{}</li>\n", v_htmlescape::escape(interest)))
        .collect();

    format!(
        r#"<html>
    <head>
        <title>Gift Predictor API</title>
        <style>
            body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }}
            ul {{ list-style-type: none; padding: 0; }}
            li {{ display: inline-block; margin: 5px; padding: 8px 15px; background-color: #f0f0f0; border-radius: 15px; }}
        </style>
    </head>
    <body>
        <h1>Birthday Gift Predictor</h1>
        <h2>Wanna cool gift for the next birthday?</h2>
        <p>Just let me know your <b>Age</b> and one of the <b>Interests</b> below:</p>
        <ul>
{}        </ul>
        <p>POST <code>/predict</code> with <code>{{"age": 30, "interest": "gaming"}}</code></p>
    </body>
</html>
"#,
        items
    )
}
