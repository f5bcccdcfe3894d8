pub mod booking;
pub mod catalog;
pub mod config;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod utils;

use std::sync::Arc;

use catalog::Catalog;
use session::{SessionStore, UserStore};

pub use config::Config;
pub use error::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub users: UserStore,
    pub sessions: SessionStore,
    pub config: Config,
}
