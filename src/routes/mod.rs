use axum::Router;

use crate::state::AppState;

pub mod auth;
pub mod dashboard;
pub mod doc;
pub mod health;
pub mod orders;
pub mod suggestions;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dashboard", dashboard::router())
        .nest("/orders", orders::router())
        .nest("/suggestions", suggestions::router())
}
