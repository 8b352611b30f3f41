use sqlx::{postgres::PgPoolOptions, PgPool, Result};

pub mod queries;

/// Connection pool for the leaderboard store. Constructed once at startup
/// and injected into the handlers through `AppState`; acquisition and
/// release are scoped per query.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
