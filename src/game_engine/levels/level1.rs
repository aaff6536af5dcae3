//! Level 1: slope, intercept, and point (x1,y1) are all uniquely chosen.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_engine::challenge::Challenge;
use crate::game_engine::helpers::frac;
use crate::game_engine::line::Line;
use crate::game_engine::models::{EquationForm, Fraction, ManipulationMode, Point, Range};
use crate::game_engine::sampler::{self, CoverageToken};

/// The three small curated slope pools for this level; the schedule draws
/// from each of them at least once.
fn slope_pools() -> Vec<Vec<Fraction>> {
    vec![
        vec![frac(3, 2), frac(4, 3), frac(5, 2), frac(5, 3)],
        vec![frac(1, 2), frac(1, 3), frac(1, 4), frac(1, 5)],
        vec![frac(2, 3), frac(3, 4), frac(3, 5), frac(2, 5)],
    ]
}

pub fn generate<R: Rng>(rng: &mut R, x_range: Range, y_range: Range) -> Vec<Challenge> {
    let mut challenges = Vec::with_capacity(6);

    // for point manipulation challenges, (x1,y1) must be in quadrant 1
    // (both positive) or quadrant 3 (both negative)
    let x1_range = Range::new(-9, 4);
    let y1_range = Range::new(-9, 4);
    assert!(x_range.contains_range(x1_range) && y_range.contains_range(y1_range));

    let quadrant1: Vec<Point> = (1..x_range.max)
        .flat_map(|x| (1..y_range.max).map(move |y| Point::new(x, y)))
        .collect();
    let quadrant3: Vec<Point> = (x1_range.min..0)
        .flat_map(|x| (y1_range.min..0).map(move |y| Point::new(x, y)))
        .collect();
    let mut point_pools = vec![quadrant1, quadrant3];
    let mut point_token = CoverageToken::new(point_pools.len());

    // for slope manipulation challenges, 1 slope must come from each pool
    let mut slope_pools = slope_pools();
    let mut slope_token = CoverageToken::new(slope_pools.len());

    // for y-intercept manipulation challenges, one negative and one positive
    let y_intercept_range = Range::new(-6, 4);
    assert!(y_range.contains_range(y_intercept_range));
    let mut intercept_pools = crate::game_engine::helpers::y_intercept_pools(y_intercept_range);
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
        let (point, slope, description) = if mode == ManipulationMode::Slope {
            (
                sampler::take_from_pools(rng, &mut point_pools, None),
                sampler::take_from_pools(rng, &mut slope_pools, Some(&mut slope_token)),
                "random choice to manipulate slope, 3 of 3 required slopes",
            )
        } else {
            (
                sampler::take_from_pools(rng, &mut point_pools, Some(&mut point_token)),
                sampler::take_from_pools(rng, &mut slope_pools, None),
                "random choice to manipulate point, 1 of 2 required points",
            )
        };
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
        let (point, slope, description) = if mode == ManipulationMode::Slope {
            (
                sampler::take_from_pools(rng, &mut point_pools, None),
                sampler::take_from_pools(rng, &mut slope_pools, Some(&mut slope_token)),
                "manipulate slope because Graph-the-Line uses point, 3 of 3 required slopes",
            )
        } else {
            (
                sampler::take_from_pools(rng, &mut point_pools, Some(&mut point_token)),
                sampler::take_from_pools(rng, &mut slope_pools, None),
                "manipulate point because Graph-the-Line uses slope, 2 of 2 required points",
            )
        };
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
