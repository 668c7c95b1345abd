use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized: {reason}")]
    Unauthorized {
        reason: &'static str,
        remote: Option<SocketAddr>,
    },
    #[error("internal error: {message}")]
    Internal {
        message: String,
        remote: Option<SocketAddr>,
    },
}

impl AppError {
    pub fn unauthorized(reason: &'static str, remote: Option<SocketAddr>) -> Self {
        Self::Unauthorized { reason, remote }
    }

    pub fn internal(message: impl Into<String>, remote: Option<SocketAddr>) -> Self {
        Self::Internal {
            message: message.into(),
            remote,
        }
    }
}

pub fn remote_label(remote: Option<SocketAddr>) -> String {
    remote.map_or_else(|| "unknown".to_string(), |addr| addr.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Clients only ever see the status code and a fixed one-line body;
        // the failure reason is logged, never sent over the wire.
        match self {
            Self::Unauthorized { reason, remote } => {
                warn!(remote = %remote_label(remote), reason, "unauthorized request");
                (StatusCode::UNAUTHORIZED, "Unauthorized\n").into_response()
            }
            Self::Internal { message, remote } => {
                error!(remote = %remote_label(remote), error = %message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error\n").into_response()
            }
        }
    }
}
