//! View state shared by all pages.

use axum::http::StatusCode;

use crate::catalog::{HotelId, StoreError};

/// Lifecycle of a view: created in `Loading`, settled by `activate`.
#[derive(Debug, Clone)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    Error(ViewError),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The loaded data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// The error, if the view failed.
    pub fn error(&self) -> Option<&ViewError> {
        match self {
            ViewState::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Why a view failed. Never shown to the user directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCause {
    /// The routed id is not a positive integer.
    InvalidId(String),
    /// The id is well-formed but absent from the catalog.
    NotFound(HotelId),
    /// The catalog could not be loaded.
    SourceUnavailable(String),
}

impl From<StoreError> for ErrorCause {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ErrorCause::NotFound(id),
            other => ErrorCause::SourceUnavailable(other.to_string()),
        }
    }
}

/// A failed view: a fixed user-facing message plus the internal cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError {
    pub message: &'static str,
    pub cause: ErrorCause,
}

impl ViewError {
    pub fn new(message: &'static str, cause: impl Into<ErrorCause>) -> Self {
        Self {
            message,
            cause: cause.into(),
        }
    }

    /// HTTP status used when the failed view is served.
    pub fn status_code(&self) -> StatusCode {
        match self.cause {
            ErrorCause::InvalidId(_) => StatusCode::BAD_REQUEST,
            ErrorCause::NotFound(_) => StatusCode::NOT_FOUND,
            ErrorCause::SourceUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
