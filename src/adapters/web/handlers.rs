//! HTTP request handlers for web adapter.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use chrono::NaiveDate;

use crate::domain::dashboard::render;
use crate::domain::instrument::default_instrument;
use crate::domain::selection::{self, parse_date, Selection};

use super::templates::{Controls, DashboardPage, NotFoundPage, PanelTemplate};
use super::{is_htmx_request, AppState, WebError};

/// Control values as submitted by the sidebar form. Blank fields fall back
/// to their defaults.
#[derive(Debug, Default, serde::Deserialize)]
pub struct DashboardQuery {
    pub stock: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_field(label: &str, value: &str) -> Result<NaiveDate, WebError> {
    parse_date(value)
        .ok_or_else(|| WebError::bad_request(format!("Invalid {} date: {}", label, value)))
}

fn parse_selection(
    stock: &str,
    start: &str,
    end: &str,
    today: NaiveDate,
) -> Result<Selection, WebError> {
    let start = parse_field("start", start)?;
    let end = parse_field("end", end)?;
    Ok(Selection::new(stock, Some(start), Some(end), today)?)
}

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, WebError> {
    let today = selection::today();
    let stock = non_blank(&query.stock)
        .unwrap_or(default_instrument().display_name)
        .to_string();
    let start = non_blank(&query.start)
        .map(str::to_string)
        .unwrap_or_else(|| selection::default_start().to_string());
    let end = non_blank(&query.end)
        .map(str::to_string)
        .unwrap_or_else(|| today.to_string());

    let (status, panel) = match parse_selection(&stock, &start, &end, today) {
        Ok(selection) => {
            let port = Arc::clone(&state.data_port);
            let outcome = tokio::task::spawn_blocking(move || render(&selection, port.as_ref()))
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "dashboard task failed");
                    WebError::internal("dashboard computation failed")
                })?;
            (StatusCode::OK, PanelTemplate::from_outcome(&outcome).render()?)
        }
        Err(err) => {
            tracing::info!(stock = %stock, start = %start, end = %end, error = %err.message, "rejected selection");
            (err.status, err.fragment())
        }
    };

    if is_htmx_request(&headers) {
        return Ok((status, Html(panel)).into_response());
    }

    let controls = Controls::new(&stock, start, end);
    let page = DashboardPage {
        controls: &controls,
        panel: &panel,
    };
    Ok((status, Html(page.render()?)).into_response())
}

pub async fn not_found(uri: Uri) -> Response {
    let page = NotFoundPage { path: uri.path() };
    match page.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(_) => WebError::not_found("page not found").into_response(),
    }
}
