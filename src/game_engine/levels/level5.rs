//! Level 5: horizontal lines enter the mix, one slot re-rolls away from a
//! set of overused slopes, and the first place-the-points challenges appear.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_engine::challenge::Challenge;
use crate::game_engine::helpers::{self, frac};
use crate::game_engine::line::Line;
use crate::game_engine::models::{EquationForm, Fraction, ManipulationMode, Range};
use crate::game_engine::sampler;

/// Adds 2 place-the-points challenges, 1 slope-intercept form, 1 point-slope
/// form. Shared with level 6.
pub(super) fn add_place_the_points_challenges<R: Rng>(
    rng: &mut R,
    challenges: &mut Vec<Challenge>,
    x_range: Range,
    y_range: Range,
) {
    // all coordinates limited to [-5,5]
    let range = Range::new(-5, 5);
    assert!(x_range.contains_range(range) && y_range.contains_range(range));
    let mut x_list = sampler::range_to_values(range, false);
    let mut y_list = sampler::range_to_values(range, false);
    let mut rise_list = sampler::range_to_values(range, true); // prevent zero slope
    let mut run_list = sampler::range_to_values(range, true); // prevent undefined slope

    // slope-intercept form: the y-intercept must be an integer, so x1 = 0
    let x1 = 0;
    let y1 = sampler::take(rng, &mut y_list);
    let rise = sampler::take(rng, &mut rise_list);
    let mut run = sampler::take(rng, &mut run_list);
    if rise.abs() == run.abs() {
        // prevent unit slope
        run = sampler::take(rng, &mut run_list);
    }
    challenges.push(Challenge::place_the_points(
        "slope-intercept, random points",
        Line::new(x1, y1, x1 + run, y1 + rise),
        EquationForm::SlopeIntercept,
        x_range,
        y_range,
    ));

    // point-slope form
    let x1 = sampler::take(rng, &mut x_list);
    let y1 = sampler::take(rng, &mut y_list);
    let rise = sampler::take(rng, &mut rise_list);
    let mut run = sampler::take(rng, &mut run_list);
    if rise.abs() == run.abs() {
        run = sampler::take(rng, &mut run_list);
    }
    challenges.push(Challenge::place_the_points(
        "point-slope, random points",
        Line::new(x1, y1, x1 + run, y1 + rise),
        EquationForm::PointSlope,
        x_range,
        y_range,
    ));
}

pub fn generate<R: Rng>(rng: &mut R, x_range: Range, y_range: Range) -> Vec<Challenge> {
    let mut challenges = Vec::with_capacity(6);

    let mut y_intercepts = sampler::range_to_values(y_range, false);

    // Make-the-Equation, slope-intercept form, slope = 0
    let b = sampler::take(rng, &mut y_intercepts);
    challenges.push(Challenge::make_the_equation(
        "slope=0",
        Line::slope_intercept(0, 1, b),
        EquationForm::SlopeIntercept,
        ManipulationMode::SlopeIntercept,
        x_range,
        y_range,
    ));

    // Graph-the-Line, slope-intercept form, slope = 0
    let b = sampler::take(rng, &mut y_intercepts);
    challenges.push(Challenge::graph_the_line(
        "slope=0",
        Line::slope_intercept(0, 1, b),
        EquationForm::SlopeIntercept,
        ManipulationMode::SlopeIntercept,
        x_range,
        y_range,
    ));

    // Graph-the-Line, random equation form, points in [-5,5]
    {
        let mut forms = vec![EquationForm::SlopeIntercept, EquationForm::PointSlope];
        let equation_form = sampler::take(rng, &mut forms);

        let range = Range::new(-5, 5);
        assert!(x_range.contains_range(range) && y_range.contains_range(range));
        let mut x_list = sampler::range_to_values(range, false);
        let mut y_list = sampler::range_to_values(range, false);
        let x1 = if equation_form == EquationForm::SlopeIntercept {
            0 // y-intercept must be an integer
        } else {
            sampler::take(rng, &mut x_list)
        };
        let y1 = sampler::take(rng, &mut y_list);
        let mut x2 = sampler::take(rng, &mut x_list);
        if x2 == x1 {
            // prevent undefined slope
            x2 = sampler::take(rng, &mut x_list);
        }
        let mut y2 = sampler::take(rng, &mut y_list);
        if (y2 - y1).abs() == (x2 - x1).abs() {
            // exclude slopes of +1 and -1
            y2 = sampler::take(rng, &mut y_list);
        }

        let line = Line::new(x1, y1, x2, y2);
        if equation_form == EquationForm::SlopeIntercept {
            challenges.push(Challenge::graph_the_line(
                "random choice of slope-intercept, points in [-5,5]",
                line,
                EquationForm::SlopeIntercept,
                ManipulationMode::SlopeIntercept,
                x_range,
                y_range,
            ));
        } else {
            challenges.push(Challenge::graph_the_line(
                "random choice of point-slope, points in [-5,5]",
                line,
                EquationForm::PointSlope,
                ManipulationMode::PointSlope,
                x_range,
                y_range,
            ));
        }
    }

    // Graph-the-Line, random equation form, random slope with exclusions
    {
        let mut forms = vec![EquationForm::SlopeIntercept, EquationForm::PointSlope];
        let equation_form = sampler::take(rng, &mut forms);

        // slopes whose simplified value matches one of these get re-rolled
        let excluded_slopes = [frac(1, 1), frac(2, 1), frac(1, 2), frac(1, 3), frac(1, 4), frac(2, 3)];

        let mut rise_list = sampler::range_to_values(y_range, false);
        let mut run_list = sampler::range_to_values(x_range, false);
        let rise = sampler::take(rng, &mut rise_list);
        let mut run = sampler::take(rng, &mut run_list);
        let mut excluded = true;
        while excluded && !run_list.is_empty() {
            excluded = false;
            for ex in excluded_slopes {
                if run == 0 || Fraction::new(rise, run).same_value(ex) {
                    excluded = true;
                    run = sampler::take(rng, &mut run_list);
                    break;
                }
            }
        }
        if excluded {
            run = 5; // a run that yields no excluded slope
        }
        assert!(run != 0);

        let point = helpers::choose_point_for_slope(rng, Fraction::new(rise, run), x_range, y_range);
        let x1 = if equation_form == EquationForm::SlopeIntercept { 0 } else { point.x };
        let y1 = point.y;

        let line = Line::new(x1, y1, x1 + run, y1 + rise);
        if equation_form == EquationForm::SlopeIntercept {
            challenges.push(Challenge::graph_the_line(
                "random choice of slope-intercept, some excluded slopes",
                line,
                EquationForm::SlopeIntercept,
                ManipulationMode::SlopeIntercept,
                x_range,
                y_range,
            ));
        } else {
            challenges.push(Challenge::graph_the_line(
                "random choice of point-slope, some excluded slopes",
                line,
                EquationForm::PointSlope,
                ManipulationMode::PointSlope,
                x_range,
                y_range,
            ));
        }
    }

    // 2 place-the-points challenges
    add_place_the_points_challenges(rng, &mut challenges, x_range, y_range);

    challenges.shuffle(rng);
    challenges
}
