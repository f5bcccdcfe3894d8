use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, booking, catalog};
use crate::middleware::auth::auth_middleware;
use crate::middleware::rate_limit::create_global_governor;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let public_governor = create_global_governor();

    // Login/registration (open)
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .layer(public_governor.clone());

    // Profile area (requires a live session)
    let session_routes = Router::new()
        .route("/logout", post(auth::logout))
        .route("/profile", get(auth::profile))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Destination and hotel browsing
    let catalog_routes = Router::new()
        .route("/destinations", get(catalog::list_destinations))
        .route("/hotels/search", get(catalog::search_hotels))
        .route("/hotels/{id}", get(catalog::get_hotel))
        .layer(public_governor.clone());

    // Booking flow: draft resolution, wizard transitions, submission
    let booking_routes = Router::new()
        .route("/draft", get(booking::booking_draft))
        .route("/wizard", post(booking::advance_wizard))
        .route("/", post(booking::create_booking))
        .layer(public_governor);

    Router::new()
        .nest("/api/auth", auth_routes.merge(session_routes))
        .nest("/api", catalog_routes)
        .nest("/api/bookings", booking_routes)
        .with_state(state)
}
