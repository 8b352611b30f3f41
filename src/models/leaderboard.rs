use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One persisted leaderboard row. Entries are insert-only: a player who
/// finishes several rounds gets several rows, and nothing is ever updated
/// or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i64,
}
