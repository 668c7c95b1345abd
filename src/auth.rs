use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{errors::AppError, remote_addr, AppState};

/// Validates `Authorization: Bearer <key>` against the configured secret.
///
/// The header value is split on the first space only, mirroring the exact
/// match the sink requires: no trimming, no case folding, no extra segments.
/// Every failure collapses to the same 401 response; the reason is only
/// visible in the log.
pub async fn require_bearer_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let remote = remote_addr(&request);

    let Some(value) = request.headers().get(header::AUTHORIZATION) else {
        return Err(AppError::unauthorized(
            "missing authorization header",
            remote,
        ));
    };

    let Ok(value) = value.to_str() else {
        return Err(AppError::unauthorized(
            "malformed authorization header",
            remote,
        ));
    };

    let Some((scheme, token)) = value.split_once(' ') else {
        return Err(AppError::unauthorized(
            "malformed authorization header",
            remote,
        ));
    };

    if scheme != "Bearer" {
        return Err(AppError::unauthorized(
            "malformed authorization header",
            remote,
        ));
    }

    if token != state.auth_token.as_ref() {
        return Err(AppError::unauthorized("invalid bearer token", remote));
    }

    Ok(next.run(request).await)
}
