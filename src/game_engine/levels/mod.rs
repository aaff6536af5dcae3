//! Challenge schedules, one module per difficulty level.
//!
//! Every module follows the same signature:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, x_range: Range, y_range: Range) -> Vec<Challenge>
//! ```
//!
//! Each schedule builds a fixed-count set slot by slot, threading
//! [`CoverageToken`](crate::game_engine::sampler::CoverageToken)s through the
//! draws that carry a coverage requirement, then shuffles the set so the
//! schedule order is not observable by the player. The factory dispatches to
//! these via `factory.rs`.

/// One-variable manipulation, small curated pools, quadrant-restricted points.
pub mod level1;
/// One-variable manipulation, full slope/intercept pools.
pub mod level2;
/// Two-variable manipulation in both equation forms.
pub mod level3;
/// Two-variable manipulation plus a slope-inversion two-points challenge.
pub mod level4;
/// Horizontal lines, excluded-slope re-rolls, place-the-points.
pub mod level5;
/// Place-the-points plus mismatched equation/manipulator representations.
pub mod level6;
