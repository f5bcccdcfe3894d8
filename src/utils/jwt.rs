use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::user::User;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,    // user id
    pub email: String,
    pub name: String, // display name for the profile header
    pub sid: Uuid,    // session id, revocable via the session store
    pub exp: i64,
    pub iat: i64,
}

pub fn create_token(
    user: &User,
    session_id: Uuid,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let now = Utc::now();
    let exp = now + Duration::hours(expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        name: format!("{} {}", user.first_name, user.last_name),
        sid: session_id,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
}

pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let user = User {
            id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            password_hash: String::new(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            avatar_url: None,
        };
        let session_id = Uuid::new_v4();

        let token = create_token(&user, session_id, "test-secret", 24).unwrap();
        let claims = verify_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.sid, session_id);
        assert_eq!(claims.name, "Demo User");

        assert!(verify_token(&token, "other-secret").is_err());
    }
}
