use axum::Router;

use crate::state::AppState;

pub mod cart;
pub mod doc;
pub mod feedback;
pub mod health;
pub mod images;
pub mod params;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/feedback", feedback::router())
        .nest("/users/{user_id}/cart", cart::router())
        .merge(images::router())
}
