pub mod health;
pub mod leaderboard;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Method routing handles the 405 for anything but GET/POST
        .route(
            "/leaderboard",
            get(leaderboard::top_entries).post(leaderboard::create_entry),
        )
}
