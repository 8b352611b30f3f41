use sqlx::{PgPool, Result};

use crate::models::LeaderboardEntry;

/// Maximum number of entries returned by the leaderboard read path
pub const TOP_LIMIT: i64 = 10;

/// Persist a completed round's score. Every submission is a new row;
/// there is no uniqueness constraint on username and no update path.
pub async fn insert_entry(pool: &PgPool, username: &str, score: i64) -> Result<()> {
    sqlx::query("INSERT INTO leaderboard (username, score) VALUES ($1, $2)")
        .bind(username)
        .bind(score)
        .execute(pool)
        .await?;
    Ok(())
}

/// Fetch the current top entries, highest score first. Ties come back in
/// whatever order the database picks.
pub async fn top_entries(pool: &PgPool) -> Result<Vec<LeaderboardEntry>> {
    sqlx::query_as::<_, LeaderboardEntry>(
        "SELECT username, score FROM leaderboard ORDER BY score DESC LIMIT $1",
    )
    .bind(TOP_LIMIT)
    .fetch_all(pool)
    .await
}
