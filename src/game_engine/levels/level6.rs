//! Level 6: place-the-points challenges plus mismatched representations,
//! e.g. a point-slope equation paired with slope-intercept manipulators.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_engine::challenge::Challenge;
use crate::game_engine::levels::level5;
use crate::game_engine::line::Line;
use crate::game_engine::models::{EquationForm, ManipulationMode, Range};
use crate::game_engine::sampler;

pub fn generate<R: Rng>(rng: &mut R, x_range: Range, y_range: Range) -> Vec<Challenge> {
    let mut challenges = Vec::with_capacity(6);

    let mut y_intercepts = sampler::range_to_values(y_range, false);

    // Place-the-Points, slope-intercept form, slope = 0 (horizontal line)
    let b = sampler::take(rng, &mut y_intercepts);
    challenges.push(Challenge::place_the_points(
        "slope=0",
        Line::slope_intercept(0, 1, b),
        EquationForm::SlopeIntercept,
        x_range,
        y_range,
    ));

    // 2 place-the-points challenges (same as level 5)
    level5::add_place_the_points_challenges(rng, &mut challenges, x_range, y_range);

    // 3 Graph-the-Line challenges with mismatched representations: the pool
    // holds 2 of each form and 3 are drawn, so both pairings always occur.
    {
        let mut equation_forms = vec![
            EquationForm::SlopeIntercept,
            EquationForm::SlopeIntercept,
            EquationForm::PointSlope,
            EquationForm::PointSlope,
        ];

        for i in 0..3 {
            let equation_form = sampler::take(rng, &mut equation_forms);

            let range = Range::new(-7, 7);
            assert!(x_range.contains_range(range) && y_range.contains_range(range));
            let mut x_list = sampler::range_to_values(range, false);
            let mut y_list = sampler::range_to_values(range, false);
            let x1 = 0; // y-intercept must be an integer since representations mismatch
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
                    format!("slope-intercept, Graph-the-Line {}", i),
                    line,
                    equation_form,
                    ManipulationMode::PointSlope,
                    x_range,
                    y_range,
                ));
            } else {
                challenges.push(Challenge::graph_the_line(
                    format!("point-slope, Graph-the-Line {}", i),
                    line,
                    equation_form,
                    ManipulationMode::SlopeIntercept,
                    x_range,
                    y_range,
                ));
            }
        }
    }

    challenges.shuffle(rng);
    challenges
}
