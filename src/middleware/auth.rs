use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::error::{AppError, AppResult};
use crate::utils::jwt::verify_token;
use crate::AppState;

/// Extract and validate the bearer token, then check the session it names is
/// still open. A logged-out session fails here even if the token itself has
/// not expired.
pub async fn auth_middleware(
    State(state): State<AppState>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let claims = verify_token(auth.token(), &state.config.jwt_secret)?;
    if !state.sessions.is_active(claims.sid) {
        return Err(AppError::Unauthorized(
            "Session has been logged out".to_string(),
        ));
    }
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
