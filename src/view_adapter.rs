use serde_json::{json, Value};

use crate::game_engine::challenge::Challenge;
use crate::game_engine::controller::GameController;
use crate::game_engine::line::Line;
use crate::game_engine::point_tool::{Orientation, PointTool};
use crate::game_engine::timer::GameTimer;

/// A line as the `[x1, y1, x2, y2]` quadruple the view layer plots.
fn line_json(line: &Line) -> Value {
    json!([line.x1, line.y1, line.x2, line.y2])
}

fn point_tool_json(tool: &PointTool) -> Value {
    let orientation = match tool.orientation {
        Orientation::Up => "up",
        Orientation::Down => "down",
    };
    json!({
        "x": tool.position().x,
        "y": tool.position().y,
        "orientation": orientation,
    })
}

/// Build the challenge block of the view state. The answer line is included
/// only once it has been revealed.
fn challenge_json(challenge: &Challenge) -> Value {
    json!({
        "kind": challenge.kind().to_string(),
        "title": challenge.title(),
        "equation_form": challenge.equation_form().to_string(),
        "manipulation_mode": challenge.manipulation_mode().to_string(),
        "guess": challenge.guess().map(line_json),
        "answer": challenge.answer_visible().then(|| line_json(challenge.answer())),
        "points": challenge.points().map(|points| {
            points.iter().map(|p| json!([p.x, p.y])).collect::<Vec<_>>()
        }),
        "point_tools": [
            point_tool_json(&challenge.point_tool1),
            point_tool_json(&challenge.point_tool2),
        ],
    })
}

/// Convert the running game to the JSON state an embedding view renders.
///
/// In-process only; nothing here is a wire protocol or storage format.
pub fn to_view_state(game: &GameController) -> Value {
    let snapshot = game.snapshot();
    json!({
        "game_phase": game.game_phase().to_string(),
        "play_state": game.play_state().to_string(),
        "level": game.level(),
        "score": game.score(),
        "perfect_score": game.perfect_score(),
        "challenge_index": game.challenge_index(),
        "challenges_per_game": game.challenges_per_game(),
        "timer_enabled": game.timer_enabled(),
        "elapsed_time": GameTimer::format_time(game.elapsed_time()),
        "is_new_best_time": game.is_new_best_time(),
        "best_scores": snapshot.best_scores,
        "best_times": snapshot.best_times,
        "challenge": challenge_json(game.current_challenge()),
    })
}
