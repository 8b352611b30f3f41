use std::collections::HashSet;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::mpsc;
use tokio::time::{interval, Duration, Interval, MissedTickBehavior};

use crate::dictionary::WordLookup;
use crate::game::session::{
    GameSession, PendingSubmission, Phase, RejectReason, SubmitAction, SubmitOutcome, TickOutcome,
};
use crate::leaderboard::LeaderboardClient;
use crate::models::{Grid, LeaderboardEntry, Position};

/// Player actions fed into the runner by the hosting UI
#[derive(Debug, Clone)]
pub enum GameCommand {
    Start,
    Select(Position),
    Submit,
    Regenerate,
    Reset,
    SubmitScore { username: String },
    Shutdown,
}

/// State changes the hosting UI renders from
#[derive(Debug, Clone)]
pub enum GameEvent {
    Started { remaining_secs: u32 },
    Tick { remaining_secs: u32 },
    PathChanged { word: String },
    TooShort,
    Word(SubmitOutcome),
    GridRegenerated { grid: Grid, blocked: HashSet<Position> },
    RoundReset { grid: Grid, blocked: HashSet<Position>, remaining_secs: u32 },
    GameOver { score: i64 },
    ScoreSubmitted { username: String },
    Leaderboard(Vec<LeaderboardEntry>),
}

type LookupFuture = BoxFuture<'static, (PendingSubmission, bool)>;

/// Async driver for one `GameSession`.
///
/// Owns the one-second countdown and the in-flight dictionary lookups, and
/// serializes every state mutation through a single `select!` loop, so no
/// two game-state mutations ever race. Lookups run as detached futures: a
/// slow dictionary never stalls the clock, and an answer that lands after a
/// reset or game-over is discarded by the session's stale guard.
pub struct GameRunner {
    session: GameSession,
    lookup: Arc<dyn WordLookup>,
    leaderboard: LeaderboardClient,
    events: mpsc::Sender<GameEvent>,
}

impl GameRunner {
    pub fn new(
        session: GameSession,
        lookup: Arc<dyn WordLookup>,
        leaderboard: LeaderboardClient,
        events: mpsc::Sender<GameEvent>,
    ) -> Self {
        Self {
            session,
            lookup,
            leaderboard,
            events,
        }
    }

    /// Drive the session until Shutdown or until the command channel closes.
    /// Dropping the command sender tears the runner (and its timer) down.
    pub async fn run(mut self, mut commands: mpsc::Receiver<GameCommand>) {
        let mut ticker = interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut lookups: FuturesUnordered<LookupFuture> = FuturesUnordered::new();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.session.tick() {
                        TickOutcome::Counted(remaining_secs) => {
                            self.emit(GameEvent::Tick { remaining_secs }).await;
                        }
                        TickOutcome::GameOver => {
                            tracing::info!("Time's up, final score {}", self.session.score());
                            self.emit(GameEvent::GameOver {
                                score: self.session.score(),
                            })
                            .await;
                        }
                        TickOutcome::Idle => {}
                    }
                }
                Some((pending, valid)) = lookups.next(), if !lookups.is_empty() => {
                    if let Some(outcome) = self.session.resolve(pending, valid) {
                        self.emit(GameEvent::Word(outcome)).await;
                    }
                }
                maybe_cmd = commands.recv() => {
                    match maybe_cmd {
                        Some(cmd) => {
                            if !self.handle_command(cmd, &mut lookups, &mut ticker).await {
                                break;
                            }
                        }
                        None => break,
                    }
                }
            }
        }
    }

    /// Apply one command. Returns false when the runner should stop.
    async fn handle_command(
        &mut self,
        cmd: GameCommand,
        lookups: &mut FuturesUnordered<LookupFuture>,
        ticker: &mut Interval,
    ) -> bool {
        match cmd {
            GameCommand::Start => {
                if self.session.start() {
                    // Give the first tick a full second
                    ticker.reset();
                    self.emit(GameEvent::Started {
                        remaining_secs: self.session.remaining_secs(),
                    })
                    .await;
                }
            }
            GameCommand::Select(pos) => {
                self.session.select(pos);
                self.emit(GameEvent::PathChanged {
                    word: self.session.current_word(),
                })
                .await;
            }
            GameCommand::Submit => match self.session.submit() {
                SubmitAction::Rejected(RejectReason::TooShort) => {
                    self.emit(GameEvent::TooShort).await;
                }
                SubmitAction::Rejected(RejectReason::NotRunning) => {}
                SubmitAction::Resolved(outcome) => {
                    self.emit(GameEvent::Word(outcome)).await;
                }
                SubmitAction::Pending(pending) => {
                    let lookup = Arc::clone(&self.lookup);
                    lookups.push(Box::pin(async move {
                        let valid = lookup.lookup(&pending.word).await;
                        (pending, valid)
                    }));
                }
            },
            GameCommand::Regenerate => {
                if self.session.regenerate() {
                    self.emit(GameEvent::GridRegenerated {
                        grid: self.session.grid().clone(),
                        blocked: self.session.blocked().clone(),
                    })
                    .await;
                }
            }
            GameCommand::Reset => {
                // In-flight lookups belong to the old round now; the
                // session's round counter makes their answers inert
                self.session.reset();
                self.emit(GameEvent::RoundReset {
                    grid: self.session.grid().clone(),
                    blocked: self.session.blocked().clone(),
                    remaining_secs: self.session.remaining_secs(),
                })
                .await;
            }
            GameCommand::SubmitScore { username } => {
                self.handle_submit_score(&username).await;
            }
            GameCommand::Shutdown => return false,
        }
        true
    }

    /// Submit the final score, once per round, then fetch the top-10.
    /// Failures are logged and dropped; there is no retry.
    async fn handle_submit_score(&mut self, username: &str) {
        if self.session.phase() != Phase::GameOver || self.session.is_submitted() {
            return;
        }
        let username = username.trim();
        if username.is_empty() {
            return;
        }

        match self.leaderboard.submit(username, self.session.score()).await {
            Ok(()) => {
                self.session.mark_submitted();
                self.emit(GameEvent::ScoreSubmitted {
                    username: username.to_string(),
                })
                .await;

                match self.leaderboard.fetch_top().await {
                    Ok(entries) => self.emit(GameEvent::Leaderboard(entries)).await,
                    Err(e) => tracing::warn!("Failed to fetch leaderboard: {}", e),
                }
            }
            Err(e) => tracing::warn!("Score submission failed: {}", e),
        }
    }

    async fn emit(&self, event: GameEvent) {
        let _ = self.events.send(event).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Default)]
    struct StubLookup {
        words: HashSet<String>,
    }

    impl StubLookup {
        fn knowing(words: &[&str]) -> Self {
            Self {
                words: words.iter().map(|w| w.to_lowercase()).collect(),
            }
        }
    }

    #[async_trait]
    impl WordLookup for StubLookup {
        async fn lookup(&self, word: &str) -> bool {
            self.words.contains(&word.to_lowercase())
        }
    }

    fn test_grid() -> Grid {
        vec![
            vec!['C', 'A', 'T', 'X', 'X'],
            vec!['X'; 5],
            vec!['X'; 5],
            vec!['X'; 5],
            vec!['X'; 5],
        ]
    }

    fn spawn_runner(
        session: GameSession,
        lookup: StubLookup,
    ) -> (
        mpsc::Sender<GameCommand>,
        mpsc::Receiver<GameEvent>,
        tokio::task::JoinHandle<()>,
    ) {
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = mpsc::channel(256);
        let leaderboard = LeaderboardClient::new(reqwest::Client::new(), "http://127.0.0.1:1");
        let runner = GameRunner::new(session, Arc::new(lookup), leaderboard, event_tx);
        let handle = tokio::spawn(runner.run(cmd_rx));
        (cmd_tx, event_rx, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_runs_to_game_over() {
        let session = GameSession::for_tests(test_grid(), HashSet::new(), 3);
        let (cmd_tx, mut event_rx, handle) = spawn_runner(session, StubLookup::default());

        cmd_tx.send(GameCommand::Start).await.unwrap();

        // The paused clock auto-advances; collect events until the round ends
        let mut ticks = 0;
        loop {
            match event_rx.recv().await.expect("runner should keep emitting") {
                GameEvent::Tick { .. } => ticks += 1,
                GameEvent::GameOver { score } => {
                    assert_eq!(score, 0);
                    break;
                }
                _ => {}
            }
        }
        assert_eq!(ticks, 2, "A 3-second round ticks twice before game over");

        cmd_tx.send(GameCommand::Shutdown).await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_word_submission_flows_through_lookup() {
        let session = GameSession::for_tests(test_grid(), HashSet::new(), 600);
        let (cmd_tx, mut event_rx, handle) = spawn_runner(session, StubLookup::knowing(&["cat"]));

        cmd_tx.send(GameCommand::Start).await.unwrap();
        for col in 0..3 {
            cmd_tx
                .send(GameCommand::Select(Position { row: 0, col }))
                .await
                .unwrap();
        }
        cmd_tx.send(GameCommand::Submit).await.unwrap();

        loop {
            match event_rx.recv().await.expect("runner should keep emitting") {
                GameEvent::Word(SubmitOutcome::Accepted {
                    word,
                    points,
                    multiplier,
                    streak,
                }) => {
                    assert_eq!(word, "CAT");
                    assert_eq!(points, 3);
                    assert_eq!(multiplier, 1.0);
                    assert_eq!(streak, 1);
                    break;
                }
                GameEvent::Word(other) => panic!("Expected an accepted word, got {:?}", other),
                _ => {}
            }
        }

        cmd_tx.send(GameCommand::Shutdown).await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_word_comes_back_invalid() {
        let session = GameSession::for_tests(test_grid(), HashSet::new(), 600);
        let (cmd_tx, mut event_rx, handle) = spawn_runner(session, StubLookup::default());

        cmd_tx.send(GameCommand::Start).await.unwrap();
        for col in 0..3 {
            cmd_tx
                .send(GameCommand::Select(Position { row: 0, col }))
                .await
                .unwrap();
        }
        cmd_tx.send(GameCommand::Submit).await.unwrap();

        loop {
            match event_rx.recv().await.expect("runner should keep emitting") {
                GameEvent::Word(SubmitOutcome::Invalid { word, score }) => {
                    assert_eq!(word, "CAT");
                    assert_eq!(score, 0, "Penalty floors at zero");
                    break;
                }
                GameEvent::Word(other) => panic!("Expected an invalid word, got {:?}", other),
                _ => {}
            }
        }

        cmd_tx.send(GameCommand::Shutdown).await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_username_never_submits() {
        let session = GameSession::for_tests(test_grid(), HashSet::new(), 1);
        let (cmd_tx, mut event_rx, handle) = spawn_runner(session, StubLookup::default());

        cmd_tx.send(GameCommand::Start).await.unwrap();
        loop {
            if let GameEvent::GameOver { .. } =
                event_rx.recv().await.expect("runner should keep emitting")
            {
                break;
            }
        }

        cmd_tx
            .send(GameCommand::SubmitScore {
                username: "   ".to_string(),
            })
            .await
            .unwrap();
        cmd_tx.send(GameCommand::Shutdown).await.unwrap();
        handle.await.unwrap();

        // Drain whatever was emitted; a blank username must not have
        // produced a submission
        while let Some(event) = event_rx.recv().await {
            assert!(
                !matches!(event, GameEvent::ScoreSubmitted { .. }),
                "Blank usernames must fail fast without submitting"
            );
        }
    }
}
