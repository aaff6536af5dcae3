//! # line_drill_gen
//!
//! A fully offline, deterministic practice-game engine for line-graphing
//! exercises.
//!
//! This library procedurally builds sets of "line" challenges — graph a line
//! from its equation, build an equation from a graph, place points to define
//! a line — across six difficulty levels, and drives the player through them
//! with attempt-limited retries, decaying scores, and best-time bookkeeping.
//!
//! ## How it works
//!
//! 1. Create a [`GameController`] from a [`GameConfig`] (axis ranges,
//!    optional RNG seed, timer on/off).
//! 2. Call [`GameController::select_level`] — the engine assembles that
//!    level's challenge set from curated slope/intercept pools under
//!    coverage constraints (every required pool contributes at least one
//!    challenge), then shuffles it.
//! 3. Edit the current challenge's guess and call
//!    [`GameController::submit_answer`] / [`GameController::advance`]; the
//!    controller walks the retry cycle, scores answers, and records best
//!    scores and times per level.
//!
//! Correctness checks use exact rational arithmetic throughout: a guess is
//! right iff it describes *exactly* the answer line, with no floating-point
//! tolerance in either direction.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same challenge sets every play-through — useful for tests and bug
//!   reports.
//! - **Coverage-constrained randomness**: each level's schedule guarantees
//!   required slope/intercept categories all appear, while the shuffled
//!   output still looks random to the player.
//! - **No I/O**: all state is in-process and transient; the host supplies a
//!   once-per-second tick for elapsed-time tracking.
//!
//! ## Quick start
//!
//! ```rust
//! use line_drill_gen::{GameConfig, GameController, GamePhase};
//!
//! // Deterministic, timed game:
//! let mut game = GameController::new(GameConfig {
//!     rng_seed: Some(42),
//!     timer_enabled: true,
//!     ..GameConfig::default()
//! });
//!
//! game.select_level(0);
//! assert_eq!(game.game_phase(), GamePhase::Play);
//!
//! while game.game_phase() == GamePhase::Play {
//!     // cheat: copy the answer into the guess, then check it
//!     let answer = *game.current_challenge().answer();
//!     game.current_challenge_mut().set_guess(Some(answer));
//!     game.submit_answer();
//!     game.advance();
//! }
//!
//! assert_eq!(game.game_phase(), GamePhase::Results);
//! assert!(game.is_perfect_score());
//! ```

pub mod game_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `line_drill_gen::GameController`
// directly without reaching into `game_engine::`.
pub use game_engine::{
    create_challenges, Challenge, ChallengeKind, ChallengeSource, CoverageToken, EquationForm,
    Fraction, GameConfig, GameController, GamePhase, GameSnapshot, GameTimer, Line,
    ManipulationMode, PlayState, Point, PointTool, Range, MAX_ATTEMPTS, MAX_POINTS_PER_CHALLENGE,
    NUM_LEVELS,
};
pub use view_adapter::to_view_state;

#[cfg(test)]
mod tests;
