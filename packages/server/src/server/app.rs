//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::gateway::{DataGateway, IdentityProvider, Mailer};
use crate::server::middleware::session_auth_middleware;
use crate::server::routes::{auth, bookings, feedback, health_handler, passes, places, profiles};

/// Shared application state: one client per collaborator for the whole
/// process, handed out as trait objects.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub data: Arc<dyn DataGateway>,
    pub mailer: Arc<dyn Mailer>,
}

/// The API routes plus session authentication, without the outer layers.
/// Split from `build_app` so tests can drive routes directly.
pub fn api_router(state: AppState) -> Router {
    let provider = state.identity.clone();

    Router::new()
        .route("/health", get(health_handler))
        // Auth + session resolution
        .route("/api/auth/sign-in", post(auth::sign_in_handler))
        .route("/api/auth/sign-out", post(auth::sign_out_handler))
        .route("/api/session", get(auth::session_handler))
        // Profile directory (admin)
        .route("/api/profiles", get(profiles::list_handler))
        .route(
            "/api/profiles/:id",
            get(profiles::get_handler).patch(profiles::update_handler),
        )
        .route("/api/profiles/:id/activate", post(profiles::activate_handler))
        .route("/api/profiles/:id/deactivate", post(profiles::deactivate_handler))
        .route(
            "/api/profiles/:id/reset-password",
            post(profiles::reset_password_handler),
        )
        // Bookings
        .route(
            "/api/bookings",
            get(bookings::list_handler).post(bookings::create_handler),
        )
        .route(
            "/api/bookings/:id/send-reminder",
            post(bookings::send_reminder_handler),
        )
        .route("/api/bookings/:id/check-in", post(bookings::check_in_handler))
        // Passes, places, feedback
        .route("/api/passes", get(passes::list_handler))
        .route("/api/places", get(places::list_handler))
        .route(
            "/api/feedback",
            get(feedback::list_handler).post(feedback::submit_handler),
        )
        // Session resolution for every route; never blocks a request.
        .layer(middleware::from_fn(move |req, next| {
            session_auth_middleware(provider.clone(), req, next)
        }))
        .with_state(state)
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // CORS: the dashboards run as a separate service.
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Rate limiting: 10 requests per second per IP with bursts of 20.
    let rate_limit_config = std::sync::Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .use_headers()
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );

    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    api_router(state)
        .layer(rate_limit_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
