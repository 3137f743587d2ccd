use axum::{
    Router,
    extract::{Json, State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use common::config::{Config, WebuiConfig};
use http::header;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::{EncodeError, PredictError},
    model::GenericError,
    predictor::Predictor,
    submission::Submission,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "target/debug/config/total_config.yaml")]
    pub config: String,
}

pub fn initialize_executable() -> Result<Config, GenericError> {
    let args = Args::parse();
    load_config(&args.config)
}

pub fn load_config(path: &str) -> Result<Config, GenericError> {
    let config = Config::load(path).map_err(|e| format!("failed to load config {}: {}", path, e))?;
    Ok(config)
}

/// Installs the global fmt subscriber. `RUST_LOG` wins over `log_level`.
pub fn initialize_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    // a subscriber may already be set (tests, embedding)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn install_metrics_recorder() -> Result<PrometheusHandle, GenericError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(handle)
}

pub struct WebuiState<S: Submission> {
    predictor: Arc<Predictor<S::Record>>,
    page: &'static str,
    options: Arc<serde_json::Value>,
    metrics: Option<PrometheusHandle>,
}

impl<S: Submission> WebuiState<S> {
    pub fn new(
        predictor: Arc<Predictor<S::Record>>,
        page: &'static str,
        options: serde_json::Value,
    ) -> Self {
        Self {
            predictor,
            page,
            options: Arc::new(options),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl<S: Submission> Clone for WebuiState<S> {
    fn clone(&self) -> Self {
        Self {
            predictor: self.predictor.clone(),
            page: self.page,
            options: self.options.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

pub fn webui_router<S: Submission>(
    state: WebuiState<S>,
    allowed_origin: Option<&str>,
) -> Result<Router, GenericError> {
    let mut app = Router::new()
        .route("/", get(index::<S>))
        .route("/api/options", get(form_options::<S>))
        .route("/api/predict", post(predict::<S>))
        .route("/health", get(health_check))
        .route("/metrics", get(render_metrics::<S>))
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = allowed_origin {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin.parse::<header::HeaderValue>()?)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    Ok(app.with_state(state))
}

pub async fn run_webui<S: Submission>(
    config: WebuiConfig,
    state: WebuiState<S>,
) -> Result<(), GenericError> {
    let app = webui_router(state, config.allowed_origin.as_deref())?;

    tracing::info!("Starting web UI at http://{}", config.server_address);
    let listener = tokio::net::TcpListener::bind(&config.server_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index<S: Submission>(State(state): State<WebuiState<S>>) -> Html<&'static str> {
    Html(state.page)
}

async fn form_options<S: Submission>(State(state): State<WebuiState<S>>) -> Response {
    Json(state.options.as_ref().clone()).into_response()
}

pub async fn predict<S: Submission>(
    State(state): State<WebuiState<S>>,
    payload: Result<Json<S>, JsonRejection>,
) -> Response {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            tracing::info!(error = %rejection.body_text(), "Unreadable prediction request");
            return error_response(
                rejection.status(),
                "invalid request body",
                vec![rejection.body_text()],
            );
        }
    };

    match state.predictor.predict_submission(submission) {
        Ok(prediction) => (StatusCode::OK, Json(prediction)).into_response(),
        Err(e) => {
            let status = error_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "Prediction failed");
            } else {
                tracing::info!(error = %e, "Prediction request rejected");
            }
            let details = match &e {
                PredictError::Validation(v) => v.messages.clone(),
                other => vec![other.to_string()],
            };
            error_response(status, &e.to_string(), details)
        }
    }
}

fn error_response(status: StatusCode, error: &str, details: Vec<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "error": error, "details": details })),
    )
        .into_response()
}

fn error_status(e: &PredictError) -> StatusCode {
    match e {
        PredictError::UnknownModel(_) => StatusCode::NOT_FOUND,
        PredictError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PredictError::Encode(EncodeError::UnknownCategory { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PredictError::Encode(_) | PredictError::Classifier(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}

async fn render_metrics<S: Submission>(State(state): State<WebuiState<S>>) -> Response {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => (StatusCode::NOT_FOUND, "metrics recorder not installed").into_response(),
    }
}
