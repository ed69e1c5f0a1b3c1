//! Domain-agnostic state-space search framework.
//!
//! Provides graph-search implementations of the classic exploration
//! strategies, all driving one expansion loop over a pluggable problem
//! contract:
//!
//! - **Depth-First Search (DFS)**: LIFO frontier; finds some solution,
//!   with no cost or length guarantee.
//! - **Breadth-First Search (BFS)**: FIFO frontier; finds a solution
//!   with the fewest actions.
//! - **Uniform-Cost Search (UCS)**: best-first frontier keyed by path
//!   cost; finds a minimum-cost solution under non-negative action costs.
//! - **A\* Search**: best-first frontier keyed by path cost plus a
//!   pluggable heuristic; finds a minimum-cost solution under an
//!   admissible, consistent heuristic while expanding fewer states
//!   than UCS.
//!
//! The [`heuristics`] module supplies admissible distance estimates for
//! grid-based, multi-goal pathfinding domains.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem.
//! It contains no domain-specific concepts — mazes, quests, routing
//! grids, etc. are all defined by consumers at higher layers through
//! the [`search::SearchProblem`] contract.

pub mod heuristics;
pub mod search;
