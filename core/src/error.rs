//! Error types for the todo core.
//!
//! # Design
//! `CollectionError` covers invariant violations inside `TodoList`.
//! `ApiError` is what `TodoClient` parse methods return; 400 and 404 get
//! dedicated variants because they are the two failures the service defines.

use thiserror::Error;

use crate::item::ItemId;

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("item id {0} is already present")]
    DuplicateId(ItemId),
}

/// Errors returned by `TodoClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 400 — the request body was rejected.
    #[error("bad request")]
    BadRequest,

    /// The server returned 404 — the referenced item does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than 200, 400 or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
