//! Fixed challenge sets for development testing, selected with
//! [`ChallengeSource::HardCoded`](crate::game_engine::models::ChallengeSource).

use crate::game_engine::challenge::Challenge;
use crate::game_engine::line::Line;
use crate::game_engine::models::{EquationForm, ManipulationMode, Range};

const DESCRIPTION: &str = "dev-hardcoded";

/// Creates the fixed dev set for `level`. Panics on an unsupported level.
pub fn create_challenges(level: usize, x_range: Range, y_range: Range) -> Vec<Challenge> {
    use EquationForm::{PointSlope, SlopeIntercept};
    use ManipulationMode as Mode;

    let gtl = |line: Line, form: EquationForm, mode: Mode| {
        Challenge::graph_the_line(DESCRIPTION, line, form, mode, x_range, y_range)
    };
    let mte = |line: Line, form: EquationForm, mode: Mode| {
        Challenge::make_the_equation(DESCRIPTION, line, form, mode, x_range, y_range)
    };
    let ptp = |line: Line, form: EquationForm| {
        Challenge::place_the_points(DESCRIPTION, line, form, x_range, y_range)
    };

    match level {
        0 => vec![
            gtl(Line::slope_intercept(1, 1, -2), SlopeIntercept, Mode::Intercept),
            gtl(Line::slope_intercept(5, 1, 1), SlopeIntercept, Mode::Slope),
            gtl(Line::slope_intercept(4, 2, 3), SlopeIntercept, Mode::SlopeIntercept),
            gtl(Line::slope_intercept(3, 3, -3), SlopeIntercept, Mode::TwoPoints),
            // mismatched equation form and graph manipulators
            gtl(Line::slope_intercept(3, 3, -3), SlopeIntercept, Mode::PointSlope),
        ],
        1 => vec![
            gtl(Line::point_slope(2, 1, 1, 2), PointSlope, Mode::Slope),
            gtl(Line::point_slope(1, -3, 1, 3), PointSlope, Mode::Point),
            gtl(Line::point_slope(-2, 1, -4, 3), PointSlope, Mode::PointSlope),
            gtl(Line::point_slope(5, 4, 3, 2), PointSlope, Mode::TwoPoints),
            // mismatched equation form and graph manipulators
            gtl(Line::slope_intercept(4, 2, 3), PointSlope, Mode::SlopeIntercept),
        ],
        2 => vec![
            mte(Line::slope_intercept(1, 1, -2), SlopeIntercept, Mode::Intercept),
            mte(Line::slope_intercept(5, 1, 1), SlopeIntercept, Mode::Slope),
            mte(Line::slope_intercept(4, 2, 3), SlopeIntercept, Mode::SlopeIntercept),
            mte(Line::slope_intercept(3, 3, -3), SlopeIntercept, Mode::SlopeIntercept),
        ],
        3 => vec![
            mte(Line::point_slope(2, 1, 1, 2), PointSlope, Mode::Slope),
            mte(Line::point_slope(1, -3, 1, 3), PointSlope, Mode::Point),
            mte(Line::point_slope(-2, 1, -4, 3), PointSlope, Mode::PointSlope),
            mte(Line::point_slope(5, 4, 3, 2), PointSlope, Mode::PointSlope),
        ],
        4 => vec![
            ptp(Line::slope_intercept(1, 1, -2), SlopeIntercept),
            ptp(Line::slope_intercept(5, 1, 1), SlopeIntercept),
            ptp(Line::slope_intercept(4, 2, 3), SlopeIntercept),
            ptp(Line::slope_intercept(3, 3, -3), SlopeIntercept),
        ],
        5 => vec![
            ptp(Line::point_slope(2, 1, 1, 2), PointSlope),
            ptp(Line::point_slope(1, -3, 1, 3), PointSlope),
            ptp(Line::point_slope(-2, 1, -4, 3), PointSlope),
            ptp(Line::point_slope(5, 4, 3, 2), PointSlope),
        ],
        _ => panic!("unsupported level: {}", level),
    }
}
