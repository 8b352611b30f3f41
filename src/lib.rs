pub mod config;
pub mod db;
pub mod dictionary;
pub mod game;
pub mod leaderboard;
pub mod models;
pub mod routes;

use config::Config;
use sqlx::PgPool;

/// Application state shared across all leaderboard handlers
pub struct AppState {
    pub config: Config,
    pub db: PgPool,
}
