use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{patch, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{
    ContactForm, ContactStatus, LeadStatus, NewLead, NewProject, ProjectRequestForm,
    QuoteRequestForm, QuoteStatus, RecordId, RequestStatus,
};
use super::repository::{
    ContactStore, LeadStore, ProjectStore, QuoteStore, RequestStore, StoreError,
};
use super::service::{IntakeError, IntakeService};
use crate::crm::import::LeadCsvImporter;

/// Router builder exposing public intake and admin mutation endpoints.
pub fn intake_router<C, R, Q, L, P>(service: Arc<IntakeService<C, R, Q, L, P>>) -> Router
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
    P: ProjectStore + 'static,
{
    Router::new()
        .route("/api/v1/intake/contact", post(contact_handler::<C, R, Q, L, P>))
        .route(
            "/api/v1/intake/project-request",
            post(request_handler::<C, R, Q, L, P>),
        )
        .route("/api/v1/intake/quote", post(quote_handler::<C, R, Q, L, P>))
        .route("/api/v1/leads", post(lead_handler::<C, R, Q, L, P>))
        .route(
            "/api/v1/leads/import",
            post(lead_import_handler::<C, R, Q, L, P>),
        )
        .route("/api/v1/projects", post(project_handler::<C, R, Q, L, P>))
        .route(
            "/api/v1/contact-submissions/:id/status",
            patch(contact_status_handler::<C, R, Q, L, P>),
        )
        .route(
            "/api/v1/project-requests/:id/status",
            patch(request_status_handler::<C, R, Q, L, P>),
        )
        .route(
            "/api/v1/quote-requests/:id/status",
            patch(quote_status_handler::<C, R, Q, L, P>),
        )
        .route(
            "/api/v1/leads/:id/status",
            patch(lead_status_handler::<C, R, Q, L, P>),
        )
        .with_state(service)
}

/// Admin payload for a status transition; the raw string is validated
/// against the target record's native vocabulary.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusUpdate {
    pub(crate) status: String,
}

/// Request payload for the CSV lead import endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct LeadImportRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LeadImportResponse {
    pub(crate) imported: usize,
    pub(crate) skipped: usize,
}

fn intake_error_response(error: IntakeError) -> Response {
    let status = match &error {
        IntakeError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        IntakeError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        IntakeError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
        IntakeError::Store(StoreError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

fn unknown_status_response(error: impl std::fmt::Display) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

pub(crate) async fn contact_handler<C, R, Q, L, P>(
    State(service): State<Arc<IntakeService<C, R, Q, L, P>>>,
    axum::Json(form): axum::Json<ContactForm>,
) -> Response
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
    P: ProjectStore + 'static,
{
    match service.submit_contact(form) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record)).into_response(),
        Err(error) => intake_error_response(error),
    }
}

pub(crate) async fn request_handler<C, R, Q, L, P>(
    State(service): State<Arc<IntakeService<C, R, Q, L, P>>>,
    axum::Json(form): axum::Json<ProjectRequestForm>,
) -> Response
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
    P: ProjectStore + 'static,
{
    match service.submit_request(form) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record)).into_response(),
        Err(error) => intake_error_response(error),
    }
}

pub(crate) async fn quote_handler<C, R, Q, L, P>(
    State(service): State<Arc<IntakeService<C, R, Q, L, P>>>,
    axum::Json(form): axum::Json<QuoteRequestForm>,
) -> Response
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
    P: ProjectStore + 'static,
{
    match service.submit_quote(form) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record)).into_response(),
        Err(error) => intake_error_response(error),
    }
}

pub(crate) async fn lead_handler<C, R, Q, L, P>(
    State(service): State<Arc<IntakeService<C, R, Q, L, P>>>,
    axum::Json(new): axum::Json<NewLead>,
) -> Response
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
    P: ProjectStore + 'static,
{
    match service.create_lead(new) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => intake_error_response(error),
    }
}

pub(crate) async fn lead_import_handler<C, R, Q, L, P>(
    State(service): State<Arc<IntakeService<C, R, Q, L, P>>>,
    axum::Json(request): axum::Json<LeadImportRequest>,
) -> Response
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
    P: ProjectStore + 'static,
{
    let parsed = match LeadCsvImporter::from_reader(Cursor::new(request.csv.into_bytes())) {
        Ok(parsed) => parsed,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
        }
    };

    let skipped = parsed.skipped;
    match service.import_leads(parsed.leads) {
        Ok(imported) => (
            StatusCode::OK,
            axum::Json(LeadImportResponse { imported, skipped }),
        )
            .into_response(),
        Err(error) => intake_error_response(error),
    }
}

pub(crate) async fn project_handler<C, R, Q, L, P>(
    State(service): State<Arc<IntakeService<C, R, Q, L, P>>>,
    axum::Json(new): axum::Json<NewProject>,
) -> Response
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
    P: ProjectStore + 'static,
{
    match service.create_project(new) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => intake_error_response(error),
    }
}

pub(crate) async fn contact_status_handler<C, R, Q, L, P>(
    State(service): State<Arc<IntakeService<C, R, Q, L, P>>>,
    Path(id): Path<String>,
    axum::Json(update): axum::Json<StatusUpdate>,
) -> Response
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
    P: ProjectStore + 'static,
{
    let status = match update.status.parse::<ContactStatus>() {
        Ok(status) => status,
        Err(error) => return unknown_status_response(error),
    };
    match service.set_contact_status(&RecordId(id), status) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => intake_error_response(error),
    }
}

pub(crate) async fn request_status_handler<C, R, Q, L, P>(
    State(service): State<Arc<IntakeService<C, R, Q, L, P>>>,
    Path(id): Path<String>,
    axum::Json(update): axum::Json<StatusUpdate>,
) -> Response
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
    P: ProjectStore + 'static,
{
    let status = match update.status.parse::<RequestStatus>() {
        Ok(status) => status,
        Err(error) => return unknown_status_response(error),
    };
    match service.set_request_status(&RecordId(id), status) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => intake_error_response(error),
    }
}

pub(crate) async fn quote_status_handler<C, R, Q, L, P>(
    State(service): State<Arc<IntakeService<C, R, Q, L, P>>>,
    Path(id): Path<String>,
    axum::Json(update): axum::Json<StatusUpdate>,
) -> Response
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
    P: ProjectStore + 'static,
{
    let status = match update.status.parse::<QuoteStatus>() {
        Ok(status) => status,
        Err(error) => return unknown_status_response(error),
    };
    match service.set_quote_status(&RecordId(id), status) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => intake_error_response(error),
    }
}

pub(crate) async fn lead_status_handler<C, R, Q, L, P>(
    State(service): State<Arc<IntakeService<C, R, Q, L, P>>>,
    Path(id): Path<String>,
    axum::Json(update): axum::Json<StatusUpdate>,
) -> Response
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
    P: ProjectStore + 'static,
{
    let status = match update.status.parse::<LeadStatus>() {
        Ok(status) => status,
        Err(error) => return unknown_status_response(error),
    };
    match service.set_lead_status(&RecordId(id), status) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => intake_error_response(error),
    }
}
