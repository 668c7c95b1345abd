use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{connect_info::ConnectInfo, Request},
    middleware, Router,
};

pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod logging;
pub mod store;

use store::PayloadStore;

#[derive(Clone)]
pub struct AppState {
    pub auth_token: Arc<str>,
    pub store: Arc<dyn PayloadStore>,
}

impl AppState {
    pub fn new(auth_token: String, store: Arc<dyn PayloadStore>) -> Self {
        Self {
            auth_token: Arc::<str>::from(auth_token),
            store,
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .fallback(http::handlers::sink)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer_token,
        ))
        .with_state(state)
}

pub(crate) fn remote_addr(request: &Request) -> Option<SocketAddr> {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0)
}
