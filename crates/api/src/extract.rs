//! Request extractors whose rejections use the JSON error contract.
//!
//! Axum's own `Json` and `Query` reject with plain-text 4xx bodies that echo
//! serde detail. These wrappers route the rejection through [`AppError`]
//! instead, so a malformed body is a `VALIDATION_ERROR` like any other.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query-string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
