//! Level 2: slope and intercept are uniquely chosen; point (x1,y1) is not
//! unique, but is chosen such that the slope indicator is on the graph.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_engine::challenge::Challenge;
use crate::game_engine::helpers;
use crate::game_engine::line::Line;
use crate::game_engine::models::{EquationForm, ManipulationMode, Range};
use crate::game_engine::sampler::{self, CoverageToken};

pub fn generate<R: Rng>(rng: &mut R, x_range: Range, y_range: Range) -> Vec<Challenge> {
    let mut challenges = Vec::with_capacity(6);

    // for slope manipulation challenges, 1 slope must come from each pool
    let mut slope_pools = helpers::standard_slope_pools();
    let mut slope_token = CoverageToken::new(slope_pools.len());

    // for y-intercept manipulation challenges, one negative and one positive
    let mut intercept_pools = helpers::y_intercept_pools(y_range);
    let mut intercept_token = CoverageToken::new(intercept_pools.len());

    // for point-slope form, one of each manipulation mode
    let mut point_slope_modes = vec![ManipulationMode::Point, ManipulationMode::Slope];

    // Graph-the-Line, slope-intercept form, slope variable
    let slope = sampler::take_from_pools(rng, &mut slope_pools, Some(&mut slope_token));
    let b = sampler::take_from_pools(rng, &mut intercept_pools, None);
    challenges.push(Challenge::graph_the_line(
        "1 of 3 required slopes",
        Line::slope_intercept(slope.numerator, slope.denominator, b),
        EquationForm::SlopeIntercept,
        ManipulationMode::Slope,
        x_range,
        y_range,
    ));

    // Graph-the-Line, slope-intercept form, intercept variable
    let slope = sampler::take_from_pools(rng, &mut slope_pools, None);
    let b = sampler::take_from_pools(rng, &mut intercept_pools, Some(&mut intercept_token));
    challenges.push(Challenge::graph_the_line(
        "1 of 2 required y-intercepts",
        Line::slope_intercept(slope.numerator, slope.denominator, b),
        EquationForm::SlopeIntercept,
        ManipulationMode::Intercept,
        x_range,
        y_range,
    ));

    // Make-the-Equation, slope-intercept form, slope variable
    let slope = sampler::take_from_pools(rng, &mut slope_pools, Some(&mut slope_token));
    let b = sampler::take_from_pools(rng, &mut intercept_pools, None);
    challenges.push(Challenge::make_the_equation(
        "2 of 3 required slopes",
        Line::slope_intercept(slope.numerator, slope.denominator, b),
        EquationForm::SlopeIntercept,
        ManipulationMode::Slope,
        x_range,
        y_range,
    ));

    // Make-the-Equation, slope-intercept form, intercept variable
    let slope = sampler::take_from_pools(rng, &mut slope_pools, None);
    let b = sampler::take_from_pools(rng, &mut intercept_pools, Some(&mut intercept_token));
    challenges.push(Challenge::make_the_equation(
        "2 of 2 required y-intercepts",
        Line::slope_intercept(slope.numerator, slope.denominator, b),
        EquationForm::SlopeIntercept,
        ManipulationMode::Intercept,
        x_range,
        y_range,
    ));

    // Graph-the-Line, point-slope form, point or slope variable (random choice)
    {
        let mode = sampler::take(rng, &mut point_slope_modes);
        let (slope, description) = if mode == ManipulationMode::Slope {
            (
                sampler::take_from_pools(rng, &mut slope_pools, Some(&mut slope_token)),
                "random choice of slope manipulation, 3 of 3 required slopes",
            )
        } else {
            (
                sampler::take_from_pools(rng, &mut slope_pools, None),
                "random choice of point manipulation",
            )
        };
        let point = helpers::choose_point_for_slope(rng, slope, x_range, y_range);
        challenges.push(Challenge::graph_the_line(
            description,
            Line::point_slope(point.x, point.y, slope.numerator, slope.denominator),
            EquationForm::PointSlope,
            mode,
            x_range,
            y_range,
        ));
    }

    // Make-the-Equation, point-slope form, whichever mode was not chosen above
    {
        let mode = sampler::take(rng, &mut point_slope_modes);
        let (slope, description) = if mode == ManipulationMode::Slope {
            (
                sampler::take_from_pools(rng, &mut slope_pools, Some(&mut slope_token)),
                "slope manipulation because Graph-the-Line uses point, 3 of 3 required slopes",
            )
        } else {
            (
                sampler::take_from_pools(rng, &mut slope_pools, None),
                "point manipulation because Graph-the-Line uses slope",
            )
        };
        let point = helpers::choose_point_for_slope(rng, slope, x_range, y_range);
        challenges.push(Challenge::make_the_equation(
            description,
            Line::point_slope(point.x, point.y, slope.numerator, slope.denominator),
            EquationForm::PointSlope,
            mode,
            x_range,
            y_range,
        ));
    }

    challenges.shuffle(rng);
    challenges
}
