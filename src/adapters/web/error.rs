//! HTTP error responses for web adapter.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::domain::error::TickerboardError;

#[derive(Debug)]
pub struct WebError {
    pub status: StatusCode,
    pub message: String,
}

impl WebError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// The error as an HTML fragment, suitable for swapping into the panel.
    pub fn fragment(&self) -> String {
        let template = super::templates::ErrorTemplate {
            message: &self.message,
            status: self.status.as_u16(),
        };
        template
            .render()
            .unwrap_or_else(|_| format!("<p class=\"alert\">{}</p>", self.status))
    }
}

pub fn status_from_error(err: &TickerboardError) -> StatusCode {
    match err {
        TickerboardError::ConfigInvalid { .. } | TickerboardError::ConfigParse { .. } => {
            StatusCode::BAD_REQUEST
        }
        TickerboardError::UnknownInstrument { .. }
        | TickerboardError::InvalidDateRange { .. } => StatusCode::BAD_REQUEST,
        TickerboardError::NoData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        TickerboardError::MarketData { .. } | TickerboardError::Io(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<TickerboardError> for WebError {
    fn from(err: TickerboardError) -> Self {
        Self::new(status_from_error(&err), err.to_string())
    }
}

impl From<askama::Error> for WebError {
    fn from(err: askama::Error) -> Self {
        tracing::error!(error = %err, "template render failed");
        Self::internal("failed to render page")
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let html = self.fragment();
        (self.status, Html(html)).into_response()
    }
}
