//! Manhattan-family heuristic functions.
//!
//! Dominance chain, for any state with at least one goal remaining and a
//! cost table with every entry at least 1:
//!
//! ```text
//! 0 <= manhattan <= weighted manhattan <= farthest goal <= true cost
//! ```
//!
//! The weighted forms equal the cost of an unobstructed direct route, so
//! they are admissible for any non-negative cost table and consistent
//! across single steps.

use super::types::{DirectionCosts, GridProblem, GridState, Position};
use crate::search::SearchProblem;

/// The zero heuristic.
///
/// A* with this heuristic is exactly uniform-cost search. Defined for
/// every problem, not just grid problems.
pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> f64 {
    0.0
}

/// Unweighted Manhattan distance from the agent to the first remaining
/// goal; 0 when no goals remain.
///
/// Admissible when every per-direction cost is at least 1: the true cost
/// of a path is then bounded below by its step count, which the
/// Manhattan distance never exceeds.
pub fn manhattan_heuristic<P: GridProblem>(state: &GridState, _problem: &P) -> f64 {
    match state.remaining_goals.first() {
        Some(&goal) => state.position.manhattan_distance(goal) as f64,
        None => 0.0,
    }
}

/// Direction-cost-weighted distance from the agent to the first
/// remaining goal; 0 when no goals remain.
///
/// Dominates [`manhattan_heuristic`] whenever the cost table is
/// asymmetric with every entry at least 1, and stays admissible for any
/// non-negative cost table.
pub fn weighted_manhattan_heuristic<P: GridProblem>(state: &GridState, problem: &P) -> f64 {
    match state.remaining_goals.first() {
        Some(&goal) => weighted_manhattan(state.position, goal, &problem.direction_costs()),
        None => 0.0,
    }
}

/// The maximum weighted distance over all remaining goals; 0 when none
/// remain.
///
/// Visiting every remaining goal costs at least the trip to the farthest
/// one, and the maximum of admissible lower bounds is itself admissible.
/// Dominates both single-goal heuristics, which shrinks the set of
/// states A* expands.
pub fn farthest_goal_heuristic<P: GridProblem>(state: &GridState, problem: &P) -> f64 {
    let costs = problem.direction_costs();
    state
        .remaining_goals
        .iter()
        .map(|&goal| weighted_manhattan(state.position, goal, &costs))
        .fold(0.0, f64::max)
}

/// Minimum cost of axis-aligned travel from `from` to `to` under the
/// given per-direction costs, ignoring obstacles.
///
/// Each axis contributes its displacement times the price of the one
/// direction that closes it: west when the target lies at or to the
/// west, east otherwise, and likewise north/south on the y axis.
pub fn weighted_manhattan(from: Position, to: Position, costs: &DirectionCosts) -> f64 {
    let dx = (from.x - to.x).abs() as f64;
    let dy = (from.y - to.y).abs() as f64;
    let x_rate = if from.x >= to.x {
        costs.west
    } else {
        costs.east
    };
    let y_rate = if from.y >= to.y {
        costs.north
    } else {
        costs.south
    };
    dx * x_rate + dy * y_rate
}
