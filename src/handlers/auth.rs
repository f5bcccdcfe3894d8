use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::user::User;
use crate::error::{AppError, AppResult};
use crate::utils::jwt::{create_token, Claims};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// The session state a client keeps between page loads, plus the bearer
/// token that backs it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub is_authenticated: bool,
    pub user_name: String,
    pub user: User,
}

fn auth_response(state: &AppState, user: User) -> AppResult<AuthResponse> {
    let session_id = state.sessions.open();
    let token = create_token(
        &user,
        session_id,
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;

    // Display name matches the original demo: the local part of the email.
    let user_name = user
        .email
        .split('@')
        .next()
        .unwrap_or(&user.email)
        .to_string();

    Ok(AuthResponse {
        token,
        is_authenticated: true,
        user_name,
        user,
    })
}

/// Register a new account and open a session for it.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    let user = User {
        id: Uuid::new_v4(),
        email: payload.email.clone(),
        password_hash,
        first_name: payload.first_name.clone(),
        last_name: payload.last_name.clone(),
        avatar_url: None,
    };
    state.users.insert(user.clone())?;

    Ok(Json(auth_response(&state, user)?))
}

/// Login with email and password.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let user = state
        .users
        .find_by_email(&payload.email)
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|e| AppError::Internal(format!("Failed to parse password hash: {}", e)))?;

    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized("Invalid email or password".to_string()))?;

    Ok(Json(auth_response(&state, user)?))
}

/// Tear down the session named by the presented token.
pub async fn logout(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<serde_json::Value>> {
    state.sessions.close(claims.sid);
    Ok(Json(serde_json::json!({ "message": "Logged out" })))
}

/// Profile of the logged-in user.
pub async fn profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<User>> {
    let user = state
        .users
        .find_by_id(claims.sub)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{DEMO_EMAIL, DEMO_PASSWORD};
    use crate::test_support::test_state;
    use crate::utils::jwt::verify_token;

    #[tokio::test]
    async fn demo_account_can_login_and_logout() {
        let state = test_state();

        let Json(auth) = login(
            State(state.clone()),
            Json(LoginRequest {
                email: DEMO_EMAIL.to_string(),
                password: DEMO_PASSWORD.to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(auth.is_authenticated);
        assert_eq!(auth.user_name, "user");

        let claims = verify_token(&auth.token, &state.config.jwt_secret).unwrap();
        assert!(state.sessions.is_active(claims.sid));

        logout(State(state.clone()), Extension(claims.clone()))
            .await
            .unwrap();
        assert!(!state.sessions.is_active(claims.sid));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let state = test_state();
        let result = login(
            State(state),
            Json(LoginRequest {
                email: DEMO_EMAIL.to_string(),
                password: "wrong-password".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn register_then_profile() {
        let state = test_state();

        let Json(auth) = register(
            State(state.clone()),
            Json(RegisterRequest {
                email: "ada@example.com".to_string(),
                password: "hunter22".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            }),
        )
        .await
        .unwrap();

        let claims = verify_token(&auth.token, &state.config.jwt_secret).unwrap();
        let Json(user) = profile(State(state.clone()), Extension(claims)).await.unwrap();
        assert_eq!(user.email, "ada@example.com");

        // Registering the same email again is a conflict.
        let result = register(
            State(state),
            Json(RegisterRequest {
                email: "ada@example.com".to_string(),
                password: "hunter22".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
