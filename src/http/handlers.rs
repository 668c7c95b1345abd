//! The sink handler: read the whole body, write it to the configured file.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;
use tracing::info;

use crate::{
    errors::{remote_label, AppError},
    remote_addr, AppState,
};

pub async fn sink(State(state): State<AppState>, request: Request) -> Result<Response, AppError> {
    let remote = remote_addr(&request);

    let body = request
        .into_body()
        .collect()
        .await
        .map_err(|err| AppError::internal(format!("failed to read request body: {err}"), remote))?
        .to_bytes();

    state
        .store
        .persist(&body)
        .await
        .map_err(|err| AppError::internal(format!("failed to write payload: {err}"), remote))?;

    info!(
        remote = %remote_label(remote),
        bytes = body.len(),
        "request processed"
    );

    Ok((StatusCode::OK, "OK\n").into_response())
}
