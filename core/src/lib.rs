//! Core of the todo service: the item model, the in-memory collection, and a
//! typed client for the HTTP contract.
//!
//! # Design
//! - `TodoList` is a plain owned value with no I/O and no locking; the server
//!   decides how to share it.
//! - `TodoClient` follows the host-does-IO pattern: it builds `HttpRequest`
//!   values and parses `HttpResponse` values, leaving the round-trip to the
//!   caller.

pub mod client;
pub mod collection;
pub mod error;
pub mod http;
pub mod item;

pub use client::TodoClient;
pub use collection::TodoList;
pub use error::{ApiError, CollectionError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use item::{make_items, CreateItems, ItemId, ItemPatch, TodoItem, SEED_TEXTS};
