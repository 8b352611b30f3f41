// Game engine modules

pub mod grid;
pub mod path;
pub mod runner;
pub mod scorer;
pub mod session;

pub use grid::GridGenerator;
pub use path::SelectionPath;
pub use runner::{GameCommand, GameEvent, GameRunner};
pub use scorer::ScoreState;
pub use session::{GameSession, Phase};
