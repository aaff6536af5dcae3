//! Level 4: two-variable manipulation plus a two-points challenge whose
//! defining point is picked so the slope indicator falls off the graph,
//! forcing the player to invert the slope.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_engine::challenge::Challenge;
use crate::game_engine::helpers::{self, frac};
use crate::game_engine::line::Line;
use crate::game_engine::models::{EquationForm, ManipulationMode, Range};
use crate::game_engine::sampler::{self, CoverageToken};

pub fn generate<R: Rng>(rng: &mut R, x_range: Range, y_range: Range) -> Vec<Challenge> {
    let mut challenges = Vec::with_capacity(6);

    let mut slope_pools = helpers::standard_slope_pools();
    let mut slope_token = CoverageToken::new(slope_pools.len());

    let mut intercept_pools = helpers::y_intercept_pools(y_range);
    let mut intercept_token = CoverageToken::new(intercept_pools.len());

    let mut equation_forms = vec![EquationForm::SlopeIntercept, EquationForm::PointSlope];

    // Make-the-Equation, slope-intercept form, slope and intercept variable
    let slope = sampler::take_from_pools(rng, &mut slope_pools, None);
    let b = sampler::take_from_pools(rng, &mut intercept_pools, Some(&mut intercept_token));
    challenges.push(Challenge::make_the_equation(
        "1 of 2 required y-intercepts",
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
        "1 of 3 required slopes",
        Line::point_slope(point.x, point.y, slope.numerator, slope.denominator),
        EquationForm::PointSlope,
        ManipulationMode::PointSlope,
        x_range,
        y_range,
    ));

    // Make-the-Equation, random equation form
    if sampler::take(rng, &mut equation_forms) == EquationForm::SlopeIntercept {
        let slope = sampler::take_from_pools(rng, &mut slope_pools, None);
        let b = sampler::take_from_pools(rng, &mut intercept_pools, None);
        challenges.push(Challenge::make_the_equation(
            "random choice of slope-intercept",
            Line::slope_intercept(slope.numerator, slope.denominator, b),
            EquationForm::SlopeIntercept,
            ManipulationMode::SlopeIntercept,
            x_range,
            y_range,
        ));
    } else {
        let slope = sampler::take_from_pools(rng, &mut slope_pools, Some(&mut slope_token));
        let point = helpers::choose_point_for_slope(rng, slope, x_range, y_range);
        challenges.push(Challenge::make_the_equation(
            "2 of 2 required slopes, random choice of point-slope",
            Line::point_slope(point.x, point.y, slope.numerator, slope.denominator),
            EquationForm::PointSlope,
            ManipulationMode::PointSlope,
            x_range,
            y_range,
        ));
    }

    // Graph-the-Line, slope-intercept form, slope and intercept variable
    let slope = sampler::take_from_pools(rng, &mut slope_pools, None);
    let b = sampler::take_from_pools(rng, &mut intercept_pools, Some(&mut intercept_token));
    challenges.push(Challenge::graph_the_line(
        "2 of 2 required y-intercepts",
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
        "3 of 3 required slopes",
        Line::point_slope(point.x, point.y, slope.numerator, slope.denominator),
        EquationForm::PointSlope,
        ManipulationMode::PointSlope,
        x_range,
        y_range,
    ));

    // Graph-the-Line, random equation form, 2 points variable. The point is
    // chosen so that (x2,y2) is off the graph and the slope must be inverted.
    {
        let mut positive_slopes = helpers::positive_fractional_slopes();
        positive_slopes.push(frac(2, 1));
        positive_slopes.push(frac(3, 1));
        positive_slopes.push(frac(4, 1));
        positive_slopes.push(frac(5, 1));
        let slope = sampler::take(rng, &mut positive_slopes);

        let point = helpers::choose_point_for_slope_inversion(rng, slope, x_range, y_range);

        if sampler::take(rng, &mut equation_forms) == EquationForm::SlopeIntercept {
            challenges.push(Challenge::graph_the_line(
                "slope-intercept because Make-the-Equation uses point-slope, force slope inversion",
                Line::slope_intercept(slope.numerator, slope.denominator, point.y),
                EquationForm::SlopeIntercept,
                ManipulationMode::TwoPoints,
                x_range,
                y_range,
            ));
        } else {
            challenges.push(Challenge::graph_the_line(
                "point-slope because Make-the-Equation uses slope-intercept, force slope inversion",
                Line::point_slope(point.x, point.y, slope.numerator, slope.denominator),
                EquationForm::PointSlope,
                ManipulationMode::TwoPoints,
                x_range,
                y_range,
            ));
        }
    }

    challenges.shuffle(rng);
    challenges
}
