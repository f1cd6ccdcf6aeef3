//! # API REST
//!
//! REST API implementation for enrol.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! The deployable `enrol-run` binary and the standalone `enrol-api-rest`
//! binary both serve the router built here.

#![warn(rust_2018_idioms)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use enrol_core::{Record, RegistrationInput, RegistrationService};

/// Application state for the REST API server
///
/// Contains shared state that needs to be accessible to all request handlers,
/// including the RegistrationService instance for data operations.
#[derive(Clone)]
pub struct AppState {
    service: Arc<Mutex<RegistrationService>>,
}

impl AppState {
    /// Wraps a service for sharing across request handlers.
    pub fn new(service: RegistrationService) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }
}

/// Health check response.
#[derive(Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Request body for submitting a registration.
#[derive(Deserialize, ToSchema)]
pub struct SubmitRegistrationReq {
    pub name: String,
    pub first_surname: String,
    #[serde(default)]
    pub second_surname: Option<String>,
    pub phone: String,
    pub national_id: String,
    pub email: String,
}

/// An accepted registration as returned by the API.
#[derive(Serialize, ToSchema)]
pub struct RegistrationRes {
    pub id: u64,
    pub name: String,
    pub first_surname: String,
    pub second_surname: String,
    pub full_name: String,
    pub phone: String,
    pub national_id: String,
    pub email: String,
    pub created_at: String,
    pub session_token: String,
}

impl From<&Record> for RegistrationRes {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            first_surname: record.first_surname.clone(),
            second_surname: record.second_surname.clone(),
            full_name: record.full_name.clone(),
            phone: record.phone.clone(),
            national_id: record.national_id.clone(),
            email: record.email.clone(),
            created_at: record.created_at.to_rfc3339(),
            session_token: record.session_token.clone(),
        }
    }
}

/// Validation messages for a rejected submission.
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorsRes {
    pub errors: Vec<String>,
}

/// All accepted registrations.
#[derive(Serialize, ToSchema)]
pub struct ListRegistrationsRes {
    pub registrations: Vec<RegistrationRes>,
}

/// Number of accepted registrations.
#[derive(Serialize, ToSchema)]
pub struct RegistrationCountRes {
    pub count: usize,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, submit_registration, list_registrations, registration_count),
    components(schemas(
        HealthRes,
        SubmitRegistrationReq,
        RegistrationRes,
        ValidationErrorsRes,
        ListRegistrationsRes,
        RegistrationCountRes,
    ))
)]
struct ApiDoc;

/// Builds the REST router with all routes, Swagger UI and CORS attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/registrations", post(submit_registration))
        .route("/registrations", get(list_registrations))
        .route("/registrations/count", get(registration_count))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the enrol REST API service.
/// This endpoint is used for monitoring and load balancer health checks.
///
/// # Returns
/// * `Json<HealthRes>` - Health status response containing service status
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "enrol REST API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/registrations",
    request_body = SubmitRegistrationReq,
    responses(
        (status = 201, description = "Registration accepted", body = RegistrationRes),
        (status = 422, description = "Validation failed", body = ValidationErrorsRes)
    )
)]
/// Submit a new registration
///
/// Normalises the submitted fields, validates them, and on success stores the
/// registration and returns the accepted record including its assigned id.
///
/// # Parameters
/// * `req` - Request body containing the registration fields
///
/// # Returns
/// * `Ok((StatusCode::CREATED, Json<RegistrationRes>))` - The accepted record
/// * `Err((StatusCode, Json<ValidationErrorsRes>))` - Validation messages
///
/// # Errors
/// Returns `422 Unprocessable Entity` with the full list of validation
/// messages if any field rule fails. Nothing is stored in that case.
#[axum::debug_handler]
async fn submit_registration(
    State(state): State<AppState>,
    Json(req): Json<SubmitRegistrationReq>,
) -> Result<(StatusCode, Json<RegistrationRes>), (StatusCode, Json<ValidationErrorsRes>)> {
    let input = RegistrationInput::from_raw(
        &req.name,
        &req.first_surname,
        req.second_surname.as_deref(),
        &req.phone,
        &req.national_id,
        &req.email,
    );

    let mut service = state.service.lock().unwrap_or_else(|e| e.into_inner());
    match service.submit(input) {
        Ok(record) => Ok((StatusCode::CREATED, Json(RegistrationRes::from(&record)))),
        Err(failure) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorsRes {
                errors: failure.errors,
            }),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/registrations",
    responses(
        (status = 200, description = "List of accepted registrations", body = ListRegistrationsRes)
    )
)]
#[axum::debug_handler]
async fn list_registrations(State(state): State<AppState>) -> Json<ListRegistrationsRes> {
    let service = state.service.lock().unwrap_or_else(|e| e.into_inner());
    let registrations = service
        .registry()
        .records()
        .iter()
        .map(RegistrationRes::from)
        .collect();

    Json(ListRegistrationsRes { registrations })
}

#[utoipa::path(
    get,
    path = "/registrations/count",
    responses(
        (status = 200, description = "Number of accepted registrations", body = RegistrationCountRes)
    )
)]
#[axum::debug_handler]
async fn registration_count(State(state): State<AppState>) -> Json<RegistrationCountRes> {
    let service = state.service.lock().unwrap_or_else(|e| e.into_inner());
    Json(RegistrationCountRes {
        count: service.registry().size(),
    })
}
