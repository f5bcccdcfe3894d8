//! In-memory account and session stores. Nothing here survives a restart;
//! the whole mock auth area is rebuilt from the seeded demo account.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::entities::user::User;
use crate::error::{AppError, AppResult};

pub const DEMO_EMAIL: &str = "user@example.com";
pub const DEMO_PASSWORD: &str = "password";

#[derive(Clone, Default)]
pub struct UserStore {
    // Keyed by lowercased email.
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl UserStore {
    pub fn insert(&self, user: User) -> AppResult<()> {
        let mut users = self.users.write();
        let key = user.email.to_lowercase();
        if users.contains_key(&key) {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        users.insert(key, user);
        Ok(())
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.read().get(&email.to_lowercase()).cloned()
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.read().values().find(|u| u.id == id).cloned()
    }

    /// Seed the demo account if it doesn't exist.
    pub fn seed_demo_account(&self) -> AppResult<()> {
        if self.find_by_email(DEMO_EMAIL).is_some() {
            return Ok(());
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(DEMO_PASSWORD.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash demo password: {e}")))?
            .to_string();

        self.insert(User {
            id: Uuid::new_v4(),
            email: DEMO_EMAIL.to_string(),
            password_hash,
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            avatar_url: None,
        })
    }
}

/// Explicit session lifecycle: login opens a session, logout tears it down.
/// Tokens carrying a session id that is no longer here are rejected, so
/// logout is real teardown rather than a client-side flag flip.
#[derive(Clone, Default)]
pub struct SessionStore {
    active: Arc<RwLock<HashSet<Uuid>>>,
}

impl SessionStore {
    pub fn open(&self) -> Uuid {
        let session_id = Uuid::new_v4();
        self.active.write().insert(session_id);
        session_id
    }

    pub fn close(&self, session_id: Uuid) -> bool {
        self.active.write().remove(&session_id)
    }

    pub fn is_active(&self, session_id: Uuid) -> bool {
        self.active.read().contains(&session_id)
    }
}
