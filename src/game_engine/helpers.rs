//! Shared builders used across the level schedules.
//!
//! Every level assembles the same raw material: curated slope pools, split
//! positive/negative y-intercept pools, and points chosen so the slope
//! indicator lands on (or deliberately off) the graph. Centralising these
//! keeps the level modules focused on their schedules.

use rand::Rng;

use crate::game_engine::models::{Fraction, Point, Range};
use crate::game_engine::sampler;

pub(crate) fn frac(numerator: i32, denominator: i32) -> Fraction {
    Fraction::new(numerator, denominator)
}

/// The positive fractional slopes used by the level-2 style schedules.
pub fn positive_fractional_slopes() -> Vec<Fraction> {
    vec![
        frac(1, 4),
        frac(1, 5),
        frac(1, 6),
        frac(1, 7),
        frac(2, 5),
        frac(3, 5),
        frac(2, 7),
        frac(3, 7),
        frac(4, 7),
        frac(5, 2),
        frac(3, 2),
        frac(7, 2),
        frac(7, 3),
        frac(7, 4),
    ]
}

/// The three standard slope pools: integers, positive fractions, negative
/// fractions. Coverage schedules require one draw from each.
pub fn standard_slope_pools() -> Vec<Vec<Fraction>> {
    vec![
        // positive and negative integers
        vec![
            frac(1, 1),
            frac(2, 1),
            frac(3, 1),
            frac(4, 1),
            frac(5, 1),
            frac(-1, 1),
            frac(-2, 1),
            frac(-3, 1),
            frac(-4, 1),
            frac(-5, 1),
        ],
        positive_fractional_slopes(),
        // negative fractions
        vec![
            frac(-1, 2),
            frac(-1, 3),
            frac(-1, 4),
            frac(-1, 5),
            frac(-2, 3),
            frac(-3, 4),
            frac(-2, 5),
            frac(-3, 5),
            frac(-4, 5),
            frac(-3, 2),
            frac(-4, 3),
            frac(-5, 2),
            frac(-5, 3),
            frac(-5, 4),
        ],
    ]
}

/// Two y-intercept pools spanning `range`: one strictly negative, one
/// strictly positive. Coverage schedules require one draw from each.
pub fn y_intercept_pools(range: Range) -> Vec<Vec<i32>> {
    vec![
        sampler::range_to_values(Range::new(range.min, -1), false),
        sampler::range_to_values(Range::new(1, range.max), false),
    ]
}

/// Integer in [min, max): mirrors the uniform pick the point choosers use,
/// degenerating to `min` when the interval is empty.
fn pick<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    if min >= max {
        min
    } else {
        rng.gen_range(min..max)
    }
}

/// Pick a point (x1,y1) that keeps the slope indicator (x2,y2) on the graph.
pub fn choose_point_for_slope<R: Rng>(
    rng: &mut R,
    slope: Fraction,
    x_range: Range,
    y_range: Range,
) -> Point {
    let rise = slope.numerator;
    let run = slope.denominator;

    let min_x = if run >= 0 { x_range.min } else { x_range.min - run };
    let max_x = if run >= 0 { x_range.max - run } else { x_range.max };
    let x = pick(rng, min_x, max_x);

    let min_y = if rise >= 0 { y_range.min } else { y_range.min - rise };
    let max_y = if rise >= 0 { y_range.max - rise } else { y_range.max };
    let y = pick(rng, min_y, max_y);

    Point::new(x, y)
}

/// Pick a point (x1,y1) on the graph such that the slope indicator (x2,y2)
/// falls *off* the graph, forcing the player to invert the slope.
pub fn choose_point_for_slope_inversion<R: Rng>(
    rng: &mut R,
    slope: Fraction,
    x_range: Range,
    y_range: Range,
) -> Point {
    let rise = slope.numerator;
    let run = slope.denominator;

    let min_x1 = if run >= 0 { x_range.max - run + 1 } else { x_range.min };
    let max_x1 = if run >= 0 { x_range.max } else { x_range.min - run - 1 };
    let x1 = pick(rng, min_x1, max_x1);

    let min_y1 = if rise >= 0 { y_range.max - rise + 1 } else { y_range.min };
    let max_y1 = if rise >= 0 { y_range.max } else { y_range.min - rise - 1 };
    let y1 = pick(rng, min_y1, max_y1);

    // (x1,y1) must be on the graph, (x2,y2) off it
    let (x2, y2) = (x1 + run, y1 + rise);
    assert!(x_range.contains(x1) && !x_range.contains(x2));
    assert!(y_range.contains(y1) && !y_range.contains(y2));

    Point::new(x1, y1)
}
