use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::aggregator::{sort_newest_first, InboxAggregator};
use super::domain::{InboxItemView, UnifiedStatus};
use crate::crm::sources::repository::{ContactStore, LeadStore, QuoteStore, RequestStore};

/// Router builder exposing the unified inbox read endpoint.
pub fn inbox_router<C, R, Q, L>(aggregator: Arc<InboxAggregator<C, R, Q, L>>) -> Router
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
{
    Router::new()
        .route("/api/v1/inbox", get(inbox_handler::<C, R, Q, L>))
        .with_state(aggregator)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct InboxQuery {
    #[serde(default)]
    pub(crate) status: Option<String>,
    #[serde(default)]
    pub(crate) q: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InboxResponse {
    pub(crate) total: usize,
    pub(crate) items: Vec<InboxItemView>,
}

pub(crate) async fn inbox_handler<C, R, Q, L>(
    State(aggregator): State<Arc<InboxAggregator<C, R, Q, L>>>,
    Query(query): Query<InboxQuery>,
) -> Response
where
    C: ContactStore + 'static,
    R: RequestStore + 'static,
    Q: QuoteStore + 'static,
    L: LeadStore + 'static,
{
    let status = match query.status.as_deref() {
        Some(raw) => match raw.parse::<UnifiedStatus>() {
            Ok(status) => Some(status),
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
            }
        },
        None => None,
    };

    // One error state for the whole list; no per-store partial rendering.
    let mut items = match aggregator.aggregate() {
        Ok(items) => items,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
        }
    };

    if let Some(wanted) = status {
        items.retain(|item| item.status == wanted);
    }
    if let Some(needle) = query.q.as_deref() {
        items.retain(|item| item.matches(needle));
    }
    sort_newest_first(&mut items);

    let response = InboxResponse {
        total: items.len(),
        items: items.iter().map(|item| item.to_view()).collect(),
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}
