//! Level 3: two variables at once — slope & intercept, or point & slope.
//! An equation-form pool is consumed exactly once across the two
//! random-form slots, so each form's pairing appears exactly once.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_engine::challenge::Challenge;
use crate::game_engine::helpers;
use crate::game_engine::line::Line;
use crate::game_engine::models::{EquationForm, ManipulationMode, Range};
use crate::game_engine::sampler::{self, CoverageToken};

pub fn generate<R: Rng>(rng: &mut R, x_range: Range, y_range: Range) -> Vec<Challenge> {
    let mut challenges = Vec::with_capacity(6);

    let mut slope_pools = helpers::standard_slope_pools();
    let mut slope_token = CoverageToken::new(slope_pools.len());

    let mut intercept_pools = helpers::y_intercept_pools(y_range);
    let mut intercept_token = CoverageToken::new(intercept_pools.len());

    // equation form for the 3rd challenge of each family
    let mut equation_forms = vec![EquationForm::SlopeIntercept, EquationForm::PointSlope];

    // Graph-the-Line, slope-intercept form, slope and intercept variable
    let slope = sampler::take_from_pools(rng, &mut slope_pools, None);
    let b = sampler::take_from_pools(rng, &mut intercept_pools, Some(&mut intercept_token));
    challenges.push(Challenge::graph_the_line(
        "1 of 2 required y-intercepts",
        Line::slope_intercept(slope.numerator, slope.denominator, b),
        EquationForm::SlopeIntercept,
        ManipulationMode::SlopeIntercept,
        x_range,
        y_range,
    ));

    // Graph-the-Line, point-slope form, point and slope variable
    let slope = sampler::take_from_pools(rng, &mut slope_pools, Some(&mut slope_token));
    let point = helpers::choose_point_for_slope(rng, slope, x_range, y_range);
    challenges.push(Challenge::graph_the_line(
        "1 of 3 required slopes",
        Line::point_slope(point.x, point.y, slope.numerator, slope.denominator),
        EquationForm::PointSlope,
        ManipulationMode::PointSlope,
        x_range,
        y_range,
    ));

    // Graph-the-Line, random equation form, 2 variables
    if sampler::take(rng, &mut equation_forms) == EquationForm::SlopeIntercept {
        let slope = sampler::take_from_pools(rng, &mut slope_pools, Some(&mut slope_token));
        let b = sampler::take_from_pools(rng, &mut intercept_pools, None);
        challenges.push(Challenge::graph_the_line(
            "random choice of slope-intercept, 2 of 2 required slopes",
            Line::slope_intercept(slope.numerator, slope.denominator, b),
            EquationForm::SlopeIntercept,
            ManipulationMode::SlopeIntercept,
            x_range,
            y_range,
        ));
    } else {
        let slope = sampler::take_from_pools(rng, &mut slope_pools, None);
        let point = helpers::choose_point_for_slope(rng, slope, x_range, y_range);
        challenges.push(Challenge::graph_the_line(
            "random choice of point-slope",
            Line::point_slope(point.x, point.y, slope.numerator, slope.denominator),
            EquationForm::PointSlope,
            ManipulationMode::PointSlope,
            x_range,
            y_range,
        ));
    }

    // Make-the-Equation, slope-intercept form, slope and intercept variable
    let slope = sampler::take_from_pools(rng, &mut slope_pools, None);
    let b = sampler::take_from_pools(rng, &mut intercept_pools, Some(&mut intercept_token));
    challenges.push(Challenge::make_the_equation(
        "2 of 2 required y-intercepts",
        Line::slope_intercept(slope.numerator, slope.denominator, b),
        EquationForm::SlopeIntercept,
        ManipulationMode::SlopeIntercept,
        x_range,
        y_range,
    ));

    // Make-the-Equation, point-slope form, point and slope variable
    let slope = sampler::take_from_pools(rng, &mut slope_pools, Some(&mut slope_token));
    let point = helpers::choose_point_for_slope(rng, slope, x_range, y_range);
    challenges.push(Challenge::make_the_equation(
        "3 of 3 required slopes",
        Line::point_slope(point.x, point.y, slope.numerator, slope.denominator),
        EquationForm::PointSlope,
        ManipulationMode::PointSlope,
        x_range,
        y_range,
    ));

    // Make-the-Equation, whichever equation form was not chosen above
    if sampler::take(rng, &mut equation_forms) == EquationForm::SlopeIntercept {
        let slope = sampler::take_from_pools(rng, &mut slope_pools, None);
        let b = sampler::take_from_pools(rng, &mut intercept_pools, None);
        challenges.push(Challenge::make_the_equation(
            "slope-intercept because Graph-the-Line uses point-slope",
            Line::slope_intercept(slope.numerator, slope.denominator, b),
            EquationForm::SlopeIntercept,
            ManipulationMode::SlopeIntercept,
            x_range,
            y_range,
        ));
    } else {
        let slope = sampler::take_from_pools(rng, &mut slope_pools, None);
        let point = helpers::choose_point_for_slope(rng, slope, x_range, y_range);
        challenges.push(Challenge::make_the_equation(
            "point-slope because Graph-the-Line uses slope-intercept",
            Line::point_slope(point.x, point.y, slope.numerator, slope.denominator),
            EquationForm::PointSlope,
            ManipulationMode::PointSlope,
            x_range,
            y_range,
        ));
    }

    challenges.shuffle(rng);
    challenges
}
