use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Geometry primitives
// ---------------------------------------------------------------------------

/// Euclid's algorithm on absolute values; result is always positive.
pub(crate) fn gcd(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a as i32
}

/// An exact rational value, used for slopes and y-intercepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i32,
    pub denominator: i32,
}

impl Fraction {
    pub fn new(numerator: i32, denominator: i32) -> Self {
        assert!(denominator != 0, "Fraction with zero denominator");
        Fraction { numerator, denominator }
    }

    /// Reduce by the GCD and normalise the sign onto the numerator.
    pub fn reduced(self) -> Self {
        let divisor = gcd(self.numerator, self.denominator);
        let (mut n, mut d) = (self.numerator / divisor, self.denominator / divisor);
        if d < 0 {
            n = -n;
            d = -d;
        }
        Fraction { numerator: n, denominator: d }
    }

    /// Exact value equality via cross-multiplication: 2/4 == 1/2.
    pub fn same_value(self, other: Fraction) -> bool {
        self.numerator as i64 * other.denominator as i64
            == other.numerator as i64 * self.denominator as i64
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.reduced();
        if r.denominator == 1 {
            write!(f, "{}", r.numerator)
        } else {
            write!(f, "{}/{}", r.numerator, r.denominator)
        }
    }
}

/// A point on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Inclusive integer range, used for axis bounds and value pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: i32,
    pub max: i32,
}

impl Range {
    pub fn new(min: i32, max: i32) -> Self {
        assert!(min <= max, "Range with min > max");
        Range { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn contains_range(&self, other: Range) -> bool {
        self.min <= other.min && self.max >= other.max
    }

    pub fn len(&self) -> usize {
        (self.max - self.min + 1) as usize
    }
}

// ---------------------------------------------------------------------------
// Challenge metadata
// ---------------------------------------------------------------------------

/// Which form the line's equation is displayed/edited in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquationForm {
    SlopeIntercept,
    PointSlope,
}

impl fmt::Display for EquationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquationForm::SlopeIntercept => write!(f, "slope-intercept"),
            EquationForm::PointSlope     => write!(f, "point-slope"),
        }
    }
}

/// Which degrees of freedom of the line the player is allowed to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManipulationMode {
    Slope,
    Intercept,
    SlopeIntercept,
    Point,
    PointSlope,
    /// 2 points that define a line: (x1,y1) and (x2,y2).
    TwoPoints,
    /// 3 arbitrary points that may or may not form a line.
    ThreePoints,
}

impl fmt::Display for ManipulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ManipulationMode::Slope          => "slope",
            ManipulationMode::Intercept      => "intercept",
            ManipulationMode::SlopeIntercept => "slope & intercept",
            ManipulationMode::Point          => "point",
            ManipulationMode::PointSlope     => "point & slope",
            ManipulationMode::TwoPoints      => "two points",
            ManipulationMode::ThreePoints    => "three points",
        };
        write!(f, "{}", s)
    }
}

/// The three challenge families, dispatched by pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeKind {
    /// Given an equation, graph the line.
    GraphTheLine,
    /// Given a graphed line, build its equation.
    MakeTheEquation,
    /// Given an equation, place 3 points that form the line.
    PlaceThePoints,
}

impl fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChallengeKind::GraphTheLine    => "Graph the Line",
            ChallengeKind::MakeTheEquation => "Make the Equation",
            ChallengeKind::PlaceThePoints  => "Place the Points",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Game flow states
// ---------------------------------------------------------------------------

/// Top-level game flow, mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player is choosing a level and settings.
    Settings,
    /// Player is working through the level's challenges.
    Play,
    /// Player is viewing the score/time summary.
    Results,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Settings => write!(f, "settings"),
            GamePhase::Play     => write!(f, "play"),
            GamePhase::Results  => write!(f, "results"),
        }
    }
}

/// Per-challenge retry cycle, nested inside [`GamePhase::Play`].
///
/// State names correspond to the main action available to the player in that
/// state, e.g. `FirstCheck` is where the first "check my answer" happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayState {
    /// Not in the play phase.
    None,
    FirstCheck,
    TryAgain,
    SecondCheck,
    ShowAnswer,
    Next,
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayState::None        => "none",
            PlayState::FirstCheck  => "first check",
            PlayState::TryAgain    => "try again",
            PlayState::SecondCheck => "second check",
            PlayState::ShowAnswer  => "show answer",
            PlayState::Next        => "next",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Where challenge sets come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeSource {
    /// Quasi-random generation per level schedule (normal play).
    Generated,
    /// Fixed sets for development testing.
    HardCoded,
}

/// Configuration handed to [`GameController::new`](crate::GameController::new).
///
/// `rng_seed: Some(u64)` reproduces the exact same challenge sets every
/// play-through — useful for tests and bug reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub challenge_source: ChallengeSource,
    pub rng_seed: Option<u64>,
    pub timer_enabled: bool,
    pub x_range: Range,
    pub y_range: Range,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            challenge_source: ChallengeSource::Generated,
            rng_seed: None,
            timer_enabled: false,
            x_range: Range::new(-10, 10),
            y_range: Range::new(-10, 10),
        }
    }
}
