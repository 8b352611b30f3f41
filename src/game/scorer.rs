/// Minimum letters for a word to be eligible for submission
pub const MIN_WORD_LEN: usize = 2;
/// Flat score penalty for a word the dictionary rejects
pub const INVALID_WORD_PENALTY: i64 = 3;
/// Multiplier gained per consecutive valid word
pub const MULTIPLIER_STEP: f64 = 0.5;
/// Multiplier every round and every broken streak starts from
pub const BASE_MULTIPLIER: f64 = 1.0;

/// Score, streak and multiplier for one round.
///
/// The score never goes below zero. The multiplier grows without bound while
/// the streak holds and always snaps back to exactly `BASE_MULTIPLIER` when
/// it breaks, never a partial decay.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreState {
    pub score: i64,
    pub streak: u32,
    pub multiplier: f64,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0,
            streak: 0,
            multiplier: BASE_MULTIPLIER,
        }
    }
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award points for a valid, novel word: one point per letter times the
    /// current multiplier, rounded. Extends the streak and grows the
    /// multiplier. Returns the points awarded.
    pub fn award(&mut self, word_len: usize) -> i64 {
        let points = (word_len as f64 * self.multiplier).round() as i64;
        self.score += points;
        self.streak += 1;
        self.multiplier += MULTIPLIER_STEP;
        points
    }

    /// Apply the invalid-word penalty, flooring the score at zero,
    /// and break the streak.
    pub fn penalize(&mut self) {
        self.score = (self.score - INVALID_WORD_PENALTY).max(0);
        self.break_streak();
    }

    /// Break the streak without touching the score (duplicate word case)
    pub fn break_streak(&mut self) {
        self.streak = 0;
        self.multiplier = BASE_MULTIPLIER;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_scales_with_multiplier() {
        let mut state = ScoreState::new();

        let points = state.award(3);
        assert_eq!(points, 3, "3 letters at x1.0 should award 3 points");
        assert_eq!(state.score, 3);
        assert_eq!(state.streak, 1);
        assert_eq!(state.multiplier, 1.5);

        let points = state.award(3);
        assert_eq!(points, 5, "3 letters at x1.5 rounds 4.5 up to 5");
        assert_eq!(state.score, 8);
        assert_eq!(state.streak, 2);
        assert_eq!(state.multiplier, 2.0);
    }

    #[test]
    fn test_award_rounds_to_nearest() {
        let mut state = ScoreState::new();
        state.multiplier = 2.5;

        // 5 * 2.5 = 12.5 rounds to 13 (round half away from zero)
        assert_eq!(state.award(5), 13);
    }

    #[test]
    fn test_penalize_floors_score_at_zero() {
        let mut state = ScoreState::new();
        state.score = 2;

        state.penalize();
        assert_eq!(state.score, 0, "Score 2 minus penalty 3 floors at 0, not -1");

        state.penalize();
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_penalize_resets_streak_and_multiplier() {
        let mut state = ScoreState::new();
        state.award(4);
        state.award(4);
        assert!(state.streak > 0);

        state.penalize();
        assert_eq!(state.streak, 0);
        assert_eq!(state.multiplier, BASE_MULTIPLIER);
    }

    #[test]
    fn test_break_streak_keeps_score() {
        let mut state = ScoreState::new();
        state.award(5);
        let score_before = state.score;

        state.break_streak();
        assert_eq!(state.score, score_before, "Duplicates never cost points");
        assert_eq!(state.streak, 0);
        assert_eq!(state.multiplier, BASE_MULTIPLIER);
    }

    #[test]
    fn test_multiplier_growth_is_unbounded() {
        let mut state = ScoreState::new();
        for _ in 0..20 {
            state.award(2);
        }
        assert_eq!(state.multiplier, BASE_MULTIPLIER + 20.0 * MULTIPLIER_STEP);
    }
}
