use serde::{Deserialize, Serialize};

use crate::game_engine::line::{Line, Y_EQUALS_X};
use crate::game_engine::models::{ChallengeKind, EquationForm, ManipulationMode, Point, Range};
use crate::game_engine::point_tool::{Orientation, PointTool};

/// Attempts the player gets per challenge before the answer is revealed.
pub const MAX_ATTEMPTS: u32 = 2;

/// Initial positions for Place-the-Points challenges; deliberately not
/// collinear, so the starting guess is no line at all.
const DEFAULT_POINTS: [Point; 3] = [
    Point { x: -3, y: 2 },
    Point { x: 0, y: 0 },
    Point { x: 3, y: 2 },
];

/// One exercise instance: match the answer line by editing whatever the
/// manipulation mode allows.
///
/// The answer is immutable and always has a defined slope; the guess is
/// replaced wholesale on every edit, never mutated in place. The three
/// challenge families share this one struct and dispatch on
/// [`ChallengeKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    kind: ChallengeKind,
    /// Dev-visible note on which schedule slot produced this challenge;
    /// the tests use it to verify pool coverage.
    description: String,
    answer: Line,
    guess: Option<Line>,
    answer_visible: bool,
    equation_form: EquationForm,
    manipulation_mode: ManipulationMode,
    x_range: Range,
    y_range: Range,
    pub point_tool1: PointTool,
    pub point_tool2: PointTool,
    /// Present only for Place-the-Points challenges.
    points: Option<[Point; 3]>,
}

/// The initial guess is computed from what the player can manipulate, so the
/// fixed parts of the guess already agree with the answer.
fn initial_guess(
    answer: &Line,
    manipulation_mode: ManipulationMode,
    x_range: Range,
    y_range: Range,
) -> Option<Line> {
    match manipulation_mode {
        // slope is variable, so start at the answer's point with a unit slope
        // that stays on the graph
        ManipulationMode::Slope => Some(Line::point_slope(
            answer.x1,
            answer.y1,
            if answer.y1 == y_range.max { -1 } else { 1 },
            if answer.x1 == x_range.max { -1 } else { 1 },
        )),
        // intercept is variable, so use the answer's slope through b = 0
        ManipulationMode::Intercept => Some(Line::slope_intercept(answer.rise, answer.run, 0)),
        // point is variable, so use the answer's slope through the origin
        ManipulationMode::Point => Some(Line::point_slope(0, 0, answer.rise, answer.run)),
        // 3 points don't initially form a line
        ManipulationMode::ThreePoints => None,
        // in all other cases, start from the standard line y = x
        _ => Some(Y_EQUALS_X),
    }
}

impl Challenge {
    fn new(
        kind: ChallengeKind,
        description: impl Into<String>,
        answer: Line,
        equation_form: EquationForm,
        manipulation_mode: ManipulationMode,
        x_range: Range,
        y_range: Range,
    ) -> Self {
        assert!(!answer.undefined_slope(), "challenge answer must have a defined slope");
        Challenge {
            kind,
            description: description.into(),
            guess: initial_guess(&answer, manipulation_mode, x_range, y_range),
            answer,
            answer_visible: false,
            equation_form,
            manipulation_mode,
            x_range,
            y_range,
            point_tool1: PointTool::new(Point::new(2, -11), Orientation::Up),
            point_tool2: PointTool::new(Point::new(7, -13), Orientation::Down),
            points: (kind == ChallengeKind::PlaceThePoints).then_some(DEFAULT_POINTS),
        }
    }

    /// Given an equation, graph the line.
    pub fn graph_the_line(
        description: impl Into<String>,
        answer: Line,
        equation_form: EquationForm,
        manipulation_mode: ManipulationMode,
        x_range: Range,
        y_range: Range,
    ) -> Self {
        Challenge::new(
            ChallengeKind::GraphTheLine,
            description,
            answer,
            equation_form,
            manipulation_mode,
            x_range,
            y_range,
        )
    }

    /// Given a graphed line, build its equation.
    pub fn make_the_equation(
        description: impl Into<String>,
        answer: Line,
        equation_form: EquationForm,
        manipulation_mode: ManipulationMode,
        x_range: Range,
        y_range: Range,
    ) -> Self {
        Challenge::new(
            ChallengeKind::MakeTheEquation,
            description,
            answer,
            equation_form,
            manipulation_mode,
            x_range,
            y_range,
        )
    }

    /// Given an equation, place 3 points that form the line.
    pub fn place_the_points(
        description: impl Into<String>,
        answer: Line,
        equation_form: EquationForm,
        x_range: Range,
        y_range: Range,
    ) -> Self {
        Challenge::new(
            ChallengeKind::PlaceThePoints,
            description,
            answer,
            equation_form,
            ManipulationMode::ThreePoints,
            x_range,
            y_range,
        )
    }

    pub fn kind(&self) -> ChallengeKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn answer(&self) -> &Line {
        &self.answer
    }

    pub fn guess(&self) -> Option<&Line> {
        self.guess.as_ref()
    }

    pub fn equation_form(&self) -> EquationForm {
        self.equation_form
    }

    pub fn manipulation_mode(&self) -> ManipulationMode {
        self.manipulation_mode
    }

    pub fn x_range(&self) -> Range {
        self.x_range
    }

    pub fn y_range(&self) -> Range {
        self.y_range
    }

    pub fn max_attempts(&self) -> u32 {
        MAX_ATTEMPTS
    }

    /// Player-visible title, based on what the player can manipulate.
    pub fn title(&self) -> &'static str {
        match self.manipulation_mode {
            ManipulationMode::Slope => "Set the Slope",
            ManipulationMode::Intercept => "Set the Y-Intercept",
            ManipulationMode::Point => "Set the Point",
            ManipulationMode::ThreePoints => "Put Points on the Line",
            _ => match self.kind {
                ChallengeKind::GraphTheLine => "Graph the Line",
                ChallengeKind::MakeTheEquation => "Make the Equation",
                ChallengeKind::PlaceThePoints => "Put Points on the Line",
            },
        }
    }

    /// Replace the guess wholesale.
    pub fn set_guess(&mut self, guess: Option<Line>) {
        self.guess = guess;
    }

    /// The three placed points (Place-the-Points only).
    pub fn points(&self) -> Option<&[Point; 3]> {
        self.points.as_ref()
    }

    /// Move the three points; the guess becomes the line they form, or
    /// `None` when they don't form one (non-collinear, or p1 == p2).
    pub fn set_points(&mut self, p1: Point, p2: Point, p3: Point) {
        assert!(
            self.kind == ChallengeKind::PlaceThePoints,
            "set_points on a {} challenge",
            self.kind
        );
        self.points = Some([p1, p2, p3]);
        self.guess = if p1 == p2 {
            None
        } else {
            let line = Line::new(p1.x, p1.y, p2.x, p2.y);
            line.contains_point(p3).then_some(line)
        };
    }

    /// True iff the guess describes exactly the answer line.
    pub fn is_correct(&self) -> bool {
        self.guess.as_ref().is_some_and(|guess| self.answer.same(guess))
    }

    pub fn answer_visible(&self) -> bool {
        self.answer_visible
    }

    pub fn set_answer_visible(&mut self, visible: bool) {
        self.answer_visible = visible;
    }

    /// Restore the initial guess, default points, tool positions, and hide
    /// the answer.
    pub fn reset(&mut self) {
        self.guess = initial_guess(&self.answer, self.manipulation_mode, self.x_range, self.y_range);
        if self.kind == ChallengeKind::PlaceThePoints {
            self.points = Some(DEFAULT_POINTS);
        }
        self.point_tool1.reset();
        self.point_tool2.reset();
        self.answer_visible = false;
    }

    /// The lines the point tools "see", in rendering order.
    pub fn graph_lines(&self) -> Vec<Line> {
        let mut lines = Vec::with_capacity(2);
        match self.kind {
            ChallengeKind::GraphTheLine | ChallengeKind::PlaceThePoints => {
                if let Some(guess) = self.guess {
                    lines.push(guess);
                }
                if self.answer_visible {
                    lines.push(self.answer);
                }
            }
            ChallengeKind::MakeTheEquation => {
                if self.answer_visible {
                    if let Some(guess) = self.guess {
                        lines.push(guess);
                    }
                }
                lines.push(self.answer);
            }
        }
        lines
    }
}
