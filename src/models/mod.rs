pub mod game;
pub mod leaderboard;

pub use game::{Grid, Position};
pub use leaderboard::LeaderboardEntry;
