use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::game_engine::challenge::Challenge;
use crate::game_engine::factory::{self, NUM_LEVELS};
use crate::game_engine::models::{GameConfig, GamePhase, PlayState};
use crate::game_engine::timer::GameTimer;

/// Points for a first-attempt correct answer; one point decays per retry.
pub const MAX_POINTS_PER_CHALLENGE: u32 = 2;

/// Immutable view of the controller's state, published to observers and
/// available for polling via [`GameController::snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub game_phase: GamePhase,
    pub play_state: PlayState,
    pub level: usize,
    pub score: u32,
    pub challenge_index: usize,
    pub challenges_per_game: usize,
    pub elapsed_time: u64,
    pub timer_enabled: bool,
    pub is_new_best_time: bool,
    pub best_scores: Vec<u32>,
    pub best_times: Vec<Option<u64>>,
}

type PhaseObserver = Box<dyn FnMut(GamePhase, &GameSnapshot)>;

/// Orchestrates the whole game: level selection, challenge-set creation,
/// the per-challenge retry cycle, scoring, and best score/time bookkeeping.
///
/// All state is owned here; observers read it (via snapshots) but mutate it
/// only through the operations below. Phase-change side effects run to
/// completion *before* observers are notified, so no observer ever sees a
/// new phase paired with stale score/time/challenge data.
pub struct GameController {
    config: GameConfig,
    rng: StdRng,
    level: usize,
    score: u32,
    challenges: Vec<Challenge>,
    challenge_index: usize,
    game_phase: GamePhase,
    play_state: PlayState,
    timer: GameTimer,
    timer_enabled: bool,
    best_scores: Vec<u32>,
    best_times: Vec<Option<u64>>,
    is_new_best_time: bool,
    observers: Vec<PhaseObserver>,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut controller = GameController {
            timer_enabled: config.timer_enabled,
            config,
            rng,
            level: 0,
            score: 0,
            challenges: Vec::new(),
            challenge_index: 0,
            game_phase: GamePhase::Settings,
            play_state: PlayState::None,
            timer: GameTimer::new(),
            best_scores: vec![0; NUM_LEVELS],
            best_times: vec![None; NUM_LEVELS],
            is_new_best_time: false,
            observers: Vec::new(),
        };
        controller.init_challenges();
        controller
    }

    // ── read access ─────────────────────────────────────────────────────────

    pub fn num_levels(&self) -> usize {
        NUM_LEVELS
    }

    pub fn game_phase(&self) -> GamePhase {
        self.game_phase
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn challenge_index(&self) -> usize {
        self.challenge_index
    }

    pub fn challenges_per_game(&self) -> usize {
        self.challenges.len()
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn current_challenge(&self) -> &Challenge {
        &self.challenges[self.challenge_index]
    }

    /// Mutable access to the current challenge, for guess/point edits. This
    /// is the only mutation path the view layer gets.
    pub fn current_challenge_mut(&mut self) -> &mut Challenge {
        &mut self.challenges[self.challenge_index]
    }

    pub fn elapsed_time(&self) -> u64 {
        self.timer.elapsed()
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    pub fn best_score(&self, level: usize) -> u32 {
        self.best_scores[level]
    }

    /// `None` until the level has a perfect, timed completion.
    pub fn best_time(&self, level: usize) -> Option<u64> {
        self.best_times[level]
    }

    /// Whether the most recently completed game beat a previous best time.
    pub fn is_new_best_time(&self) -> bool {
        self.is_new_best_time
    }

    /// Points awarded for a correct answer on the given attempt number.
    pub fn compute_points(&self, attempts: u32) -> u32 {
        (MAX_POINTS_PER_CHALLENGE + 1).saturating_sub(attempts)
    }

    /// Score for first-attempt-correct on every challenge.
    pub fn perfect_score(&self) -> u32 {
        self.challenges.len() as u32 * self.compute_points(1)
    }

    pub fn is_perfect_score(&self) -> bool {
        self.score == self.perfect_score()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_phase: self.game_phase,
            play_state: self.play_state,
            level: self.level,
            score: self.score,
            challenge_index: self.challenge_index,
            challenges_per_game: self.challenges.len(),
            elapsed_time: self.timer.elapsed(),
            timer_enabled: self.timer_enabled,
            is_new_best_time: self.is_new_best_time,
            best_scores: self.best_scores.clone(),
            best_times: self.best_times.clone(),
        }
    }

    /// Register a phase-change observer. Observers run strictly after the
    /// transition's side effects, with a snapshot of the settled state.
    pub fn on_phase_change(&mut self, observer: impl FnMut(GamePhase, &GameSnapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ── operations ──────────────────────────────────────────────────────────

    /// Choose a level and start playing it: regenerates the challenge set,
    /// resets the score, and starts the clock when the timer is enabled.
    pub fn select_level(&mut self, level: usize) {
        assert!(level < NUM_LEVELS, "unsupported level: {}", level);
        self.level = level;
        self.set_game_phase(GamePhase::Play);
    }

    /// Check the current guess. Valid in `FirstCheck` (award 2 / retry),
    /// `TryAgain` (arm the second check), and `SecondCheck` (award 1 /
    /// reveal the answer).
    pub fn submit_answer(&mut self) {
        match self.play_state {
            PlayState::FirstCheck => {
                if self.current_challenge().is_correct() {
                    self.score += self.compute_points(1);
                    self.set_play_state(PlayState::Next);
                } else {
                    self.set_play_state(PlayState::TryAgain);
                }
            }
            PlayState::TryAgain => self.set_play_state(PlayState::SecondCheck),
            PlayState::SecondCheck => {
                if self.current_challenge().is_correct() {
                    self.score += self.compute_points(2);
                    self.set_play_state(PlayState::Next);
                } else {
                    // out of attempts; reveal and move on
                    self.set_play_state(PlayState::ShowAnswer);
                }
            }
            state => panic!("submit_answer in '{}' state", state),
        }
    }

    /// Move past a resolved challenge: next challenge, or results when this
    /// was the last one.
    pub fn advance(&mut self) {
        assert!(
            matches!(self.play_state, PlayState::Next | PlayState::ShowAnswer),
            "advance in '{}' state",
            self.play_state
        );
        self.advance_to_next();
    }

    /// Back to the settings screen; scores and times are kept.
    pub fn return_to_settings(&mut self) {
        self.set_game_phase(GamePhase::Settings);
    }

    /// Full reset: settings phase, level 0, best scores and times cleared,
    /// challenge set regenerated.
    pub fn reset_game(&mut self) {
        self.level = 0;
        self.score = 0;
        self.timer_enabled = self.config.timer_enabled;
        self.is_new_best_time = false;
        self.best_scores = vec![0; NUM_LEVELS];
        self.best_times = vec![None; NUM_LEVELS];
        self.timer.reset();
        self.set_game_phase(GamePhase::Settings);
        self.init_challenges();
    }

    pub fn set_timer_enabled(&mut self, enabled: bool) {
        self.timer_enabled = enabled;
    }

    /// One second of wall-clock time elapsed, delivered by the host.
    pub fn tick(&mut self) {
        self.timer.tick();
    }

    /// Skips the current challenge. This is a developer feature; score and
    /// best times are meaningless after using it.
    pub fn skip_current_challenge(&mut self) {
        self.advance_to_next();
    }

    /// Replays the current challenge from its initial state. This is a
    /// developer feature; score and best times are meaningless after using
    /// it.
    pub fn replay_current_challenge(&mut self) {
        self.challenges[self.challenge_index].reset();
        self.set_play_state(PlayState::FirstCheck);
    }

    // ── internals ───────────────────────────────────────────────────────────

    fn init_challenges(&mut self) {
        self.challenge_index = 0;
        self.challenges = factory::create_challenges(
            &mut self.rng,
            self.level,
            self.config.challenge_source,
            self.config.x_range,
            self.config.y_range,
        );
    }

    /// All side effects of a phase transition run here, before the phase
    /// value is stored and observers are notified.
    fn set_game_phase(&mut self, phase: GamePhase) {
        match phase {
            GamePhase::Settings => {
                self.play_state = PlayState::None;
                self.timer.stop();
            }
            GamePhase::Play => {
                self.init_challenges();
                self.play_state = PlayState::FirstCheck;
                self.score = 0;
                self.is_new_best_time = false;
                self.timer.reset();
                if self.timer_enabled {
                    self.timer.start();
                }
            }
            GamePhase::Results => {
                self.play_state = PlayState::None;
                self.timer.stop();
                self.update_best_score();
                self.update_best_time();
            }
        }
        self.game_phase = phase;
        self.notify_phase_observers(phase);
    }

    fn set_play_state(&mut self, state: PlayState) {
        if matches!(state, PlayState::Next | PlayState::ShowAnswer) {
            self.challenges[self.challenge_index].set_answer_visible(true);
        }
        self.play_state = state;
    }

    fn advance_to_next(&mut self) {
        if self.challenge_index == self.challenges.len() - 1 {
            self.set_game_phase(GamePhase::Results);
        } else {
            self.challenge_index += 1;
            self.set_play_state(PlayState::FirstCheck);
        }
    }

    fn update_best_score(&mut self) {
        if self.score > self.best_scores[self.level] {
            self.best_scores[self.level] = self.score;
        }
    }

    /// Best-time bookkeeping, evaluated only at the end of a game: applies
    /// only to timed games with a perfect score. A first time is recorded
    /// without raising the new-best flag; only beating a previous time does.
    fn update_best_time(&mut self) {
        debug_assert!(!self.timer.is_running());
        self.is_new_best_time = false;
        if self.timer_enabled && self.is_perfect_score() {
            let time = self.timer.elapsed();
            match self.best_times[self.level] {
                None => self.best_times[self.level] = Some(time),
                Some(best) if time < best => {
                    self.best_times[self.level] = Some(time);
                    self.is_new_best_time = true;
                }
                Some(_) => {}
            }
        }
    }

    fn notify_phase_observers(&mut self, phase: GamePhase) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        let mut observers = std::mem::take(&mut self.observers);
        for observer in observers.iter_mut() {
            observer(phase, &snapshot);
        }
        self.observers = observers;
    }
}
