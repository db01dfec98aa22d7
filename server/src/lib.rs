//! HTTP layer of the todo service.
//!
//! # Design
//! The collection is constructed by the caller and injected into the router
//! as state, so the router can be driven in tests with any starting list.
//! Handlers hold the lock for the whole of each mutation.

pub mod config;
pub mod cors;
pub mod error;
pub mod observability;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::TodoList;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};
use crate::cors::OriginPolicy;

pub type SharedList = Arc<RwLock<TodoList>>;

pub fn app(list: TodoList, config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = OriginPolicy::new(&config.cors_origin_suffix)?.into_layer();
    let state: SharedList = Arc::new(RwLock::new(list));
    Ok(Router::new()
        .route("/", get(routes::list_items).post(routes::create_items))
        .route("/{id}", patch(routes::update_item).delete(routes::delete_item))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Serve the given list on an already bound listener until the process exits.
pub async fn run(listener: TcpListener, list: TodoList, config: &ServerConfig) -> Result<(), ServeError> {
    let app = app(list, config)?;
    axum::serve(listener, app).await?;
    Ok(())
}
