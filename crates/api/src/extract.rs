//! Request extractors whose rejections are rendered through [`AppError`].

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
///
/// Behaves like [`axum::Json`], but a missing content type, malformed JSON or
/// a field of the wrong type all produce a plain-text 400 starting with
/// `error decoding request body:`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Query string parameters.
///
/// Behaves like [`axum::extract::Query`]; a query string that cannot be
/// deserialized (a repeated key, for instance) is a plain-text 400 starting
/// with `error decoding query string:`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
