use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::consolidator::{sort_by_recent_activity, ClientDirectory};
use super::domain::ClientSummary;
use crate::crm::sources::repository::{ContactStore, LeadStore, ProjectStore, RequestStore};

/// Router builder exposing the consolidated client roster.
pub fn client_router<P, L, R, C>(directory: Arc<ClientDirectory<P, L, R, C>>) -> Router
where
    P: ProjectStore + 'static,
    L: LeadStore + 'static,
    R: RequestStore + 'static,
    C: ContactStore + 'static,
{
    Router::new()
        .route("/api/v1/clients", get(roster_handler::<P, L, R, C>))
        .route("/api/v1/clients/:email", get(client_handler::<P, L, R, C>))
        .with_state(directory)
}

#[derive(Debug, Serialize)]
pub(crate) struct RosterResponse {
    pub(crate) total: usize,
    pub(crate) clients: Vec<ClientSummary>,
}

pub(crate) async fn roster_handler<P, L, R, C>(
    State(directory): State<Arc<ClientDirectory<P, L, R, C>>>,
) -> Response
where
    P: ProjectStore + 'static,
    L: LeadStore + 'static,
    R: RequestStore + 'static,
    C: ContactStore + 'static,
{
    match directory.consolidate() {
        Ok(mut rows) => {
            sort_by_recent_activity(&mut rows);
            let response = RosterResponse {
                total: rows.len(),
                clients: rows,
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn client_handler<P, L, R, C>(
    State(directory): State<Arc<ClientDirectory<P, L, R, C>>>,
    Path(email): Path<String>,
) -> Response
where
    P: ProjectStore + 'static,
    L: LeadStore + 'static,
    R: RequestStore + 'static,
    C: ContactStore + 'static,
{
    match directory.consolidate() {
        // Lookup is exact string equality on the stored email, same as the
        // consolidation key.
        Ok(rows) => match rows.into_iter().find(|row| row.email == email) {
            Some(row) => (StatusCode::OK, axum::Json(row)).into_response(),
            None => {
                let payload = json!({ "error": "no client with that email" });
                (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
            }
        },
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
