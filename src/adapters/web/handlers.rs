//! HTTP request handlers for web adapter.

use axum::{Json, extract::State, http::Uri};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::domain::summary::{Summary, summarize};

use super::{AppState, WebError};

/// `GET /api/finance`: the summary is rebuilt from the provider on every call.
pub async fn finance_summary(State(state): State<Arc<AppState>>) -> Result<Json<Summary>, WebError> {
    let records = state.records.records()?;
    let summary = summarize(&records);
    tracing::debug!(
        records = summary.records.len(),
        receivables = summary.receivables.len(),
        payables = summary.payables.len(),
        "built finance summary"
    );
    Ok(Json(summary))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn not_found(uri: Uri) -> WebError {
    WebError::not_found(format!("no route for {}", uri.path()))
}
