//! Route definitions for the FarmEase API

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public, except /me)
        .nest("/auth", auth_routes(state.clone()))
        // Sample data (public)
        .route("/weather", get(handlers::get_weather))
        .route("/market", get(handlers::get_market_prices))
        // Protected routes - farm management
        .nest("/farms", farm_routes(state.clone()))
        // Protected routes - activity log
        .nest("/activities", activity_routes(state))
}

/// Authentication routes
fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .merge(protected)
}

/// Farm management routes (protected)
fn farm_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_farms).post(handlers::create_farm))
        .route(
            "/:farm_id",
            get(handlers::get_farm)
                .put(handlers::update_farm)
                .delete(handlers::delete_farm),
        )
        .route("/:farm_id/growth", get(handlers::get_growth_data))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Activity log routes (protected)
fn activity_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_activities).post(handlers::log_activity))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
