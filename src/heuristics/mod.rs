//! Admissible distance heuristics for grid pathfinding problems.
//!
//! All heuristics are pure functions of `(state, problem)` and plug
//! directly into [`SearchRunner::astar`](crate::search::SearchRunner::astar).
//! They apply to problems whose state is an agent position plus the set
//! of goal positions still to be visited, and they form a dominance
//! chain: each estimate is at least as large as the previous one while
//! remaining a lower bound on the true remaining cost.
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Pearl (1984), *Heuristics: Intelligent Search Strategies for
//!   Computer Problem Solving*

mod manhattan;
mod types;

pub use manhattan::{
    farthest_goal_heuristic, manhattan_heuristic, null_heuristic, weighted_manhattan,
    weighted_manhattan_heuristic,
};
pub use types::{Direction, DirectionCosts, GridProblem, GridState, Position};
