use std::collections::HashSet;

use crate::game::grid::GridGenerator;
use crate::game::path::SelectionPath;
use crate::game::scorer::{ScoreState, MIN_WORD_LEN};
use crate::models::{Grid, Position};

/// Round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    GameOver,
}

/// What one clock tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Clock is not running; nothing changed
    Idle,
    /// Clock decremented, this many seconds remain
    Counted(u32),
    /// Clock hit zero and the round just ended
    GameOver,
}

/// Immediate result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    /// Nothing happened (round not running, or word too short)
    Rejected(RejectReason),
    /// Settled synchronously without consulting the dictionary
    Resolved(SubmitOutcome),
    /// The word needs a dictionary lookup; feed the answer to `resolve`
    Pending(PendingSubmission),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    NotRunning,
    TooShort,
}

/// Final verdict on a submitted word
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted {
        word: String,
        points: i64,
        /// Multiplier the points were scored at (before the streak grew it)
        multiplier: f64,
        streak: u32,
    },
    Invalid {
        word: String,
        score: i64,
    },
    Duplicate {
        word: String,
    },
}

/// A submission waiting on the dictionary. Carries the round it was made in
/// so answers that arrive after a reset or game-over are discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub word: String,
    round: u64,
}

/// Single-player round state machine: grid, selection path, scoring, used
/// words and the countdown clock. All transitions are synchronous; the async
/// host (see `game::runner`) drives ticks and dictionary lookups into it.
pub struct GameSession {
    grid: Grid,
    blocked: HashSet<Position>,
    path: SelectionPath,
    used_words: HashSet<String>,
    scoring: ScoreState,
    round_duration: u32,
    remaining_secs: u32,
    phase: Phase,
    /// Bumped on every reset; stale dictionary answers check against it
    round: u64,
    score_submitted: bool,
}

impl GameSession {
    pub fn new(round_duration: u32) -> Self {
        Self {
            grid: GridGenerator::generate(),
            blocked: GridGenerator::generate_blocked(),
            path: SelectionPath::new(),
            used_words: HashSet::new(),
            scoring: ScoreState::new(),
            round_duration,
            remaining_secs: round_duration,
            phase: Phase::NotStarted,
            round: 0,
            score_submitted: false,
        }
    }

    /// Begin the round. Returns false if it already started or ended.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    /// Advance the clock by one second. Only a running round counts down;
    /// the transition to GameOver fires exactly once.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.phase = Phase::GameOver;
            TickOutcome::GameOver
        } else {
            TickOutcome::Counted(self.remaining_secs)
        }
    }

    /// Apply a cell click to the selection path. Ignored unless the round
    /// is running.
    pub fn select(&mut self, pos: Position) {
        if self.phase != Phase::Running {
            return;
        }
        self.path.select(pos, &self.blocked);
    }

    /// Submit the word currently spelled by the path.
    ///
    /// Decision order: too-short words are rejected without touching any
    /// state (the path stays for further selection); duplicates settle
    /// immediately, breaking the streak; everything else clears the path and
    /// returns a pending submission for the dictionary to decide.
    pub fn submit(&mut self) -> SubmitAction {
        if self.phase != Phase::Running {
            return SubmitAction::Rejected(RejectReason::NotRunning);
        }

        let word = self.path.word(&self.grid);
        if word.chars().count() < MIN_WORD_LEN {
            return SubmitAction::Rejected(RejectReason::TooShort);
        }

        if self.used_words.contains(&word.to_lowercase()) {
            self.scoring.break_streak();
            self.path.clear();
            return SubmitAction::Resolved(SubmitOutcome::Duplicate { word });
        }

        self.path.clear();
        SubmitAction::Pending(PendingSubmission {
            word,
            round: self.round,
        })
    }

    /// Settle a pending submission with the dictionary's verdict.
    ///
    /// Returns None, mutating nothing, when the answer is stale: the round
    /// it belongs to was reset, or the clock ran out in the meantime.
    pub fn resolve(&mut self, pending: PendingSubmission, valid: bool) -> Option<SubmitOutcome> {
        if self.phase != Phase::Running || pending.round != self.round {
            return None;
        }

        if valid {
            let multiplier = self.scoring.multiplier;
            let points = self.scoring.award(pending.word.chars().count());
            self.used_words.insert(pending.word.to_lowercase());
            Some(SubmitOutcome::Accepted {
                word: pending.word,
                points,
                multiplier,
                streak: self.scoring.streak,
            })
        } else {
            self.scoring.penalize();
            Some(SubmitOutcome::Invalid {
                word: pending.word,
                score: self.scoring.score,
            })
        }
    }

    /// Swap in a fresh grid and blocked set, clearing the selection but
    /// leaving score, streak, used words and the clock alone.
    /// Refused once the round is over.
    pub fn regenerate(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.grid = GridGenerator::generate();
        self.blocked = GridGenerator::generate_blocked();
        self.path.clear();
        true
    }

    /// Full reset: back to NotStarted with all round state reinitialized.
    /// Bumps the round counter so in-flight dictionary answers die quietly.
    pub fn reset(&mut self) {
        self.grid = GridGenerator::generate();
        self.blocked = GridGenerator::generate_blocked();
        self.path.clear();
        self.used_words.clear();
        self.scoring = ScoreState::new();
        self.remaining_secs = self.round_duration;
        self.phase = Phase::NotStarted;
        self.round += 1;
        self.score_submitted = false;
    }

    /// Latch the once-per-round leaderboard submission
    pub fn mark_submitted(&mut self) {
        self.score_submitted = true;
    }

    pub fn is_submitted(&self) -> bool {
        self.score_submitted
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn score(&self) -> i64 {
        self.scoring.score
    }

    pub fn streak(&self) -> u32 {
        self.scoring.streak
    }

    pub fn multiplier(&self) -> f64 {
        self.scoring.multiplier
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn blocked(&self) -> &HashSet<Position> {
        &self.blocked
    }

    pub fn path(&self) -> &[Position] {
        self.path.positions()
    }

    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    /// The word the current path spells
    pub fn current_word(&self) -> String {
        self.path.word(&self.grid)
    }
}

#[cfg(test)]
impl GameSession {
    /// Session with a known grid and blocked set, for deterministic tests
    pub(crate) fn for_tests(grid: Grid, blocked: HashSet<Position>, round_duration: u32) -> Self {
        let mut session = Self::new(round_duration);
        session.grid = grid;
        session.blocked = blocked;
        session
    }
}
