//! Graph search over an abstract problem contract.
//!
//! Four strategies share a single pop/expand/push loop and differ only
//! in frontier discipline and priority key: DFS (LIFO), BFS (FIFO),
//! UCS (best-first on path cost), and A* (best-first on path cost plus
//! a heuristic estimate). All four perform graph search: a state is
//! expanded at most once per invocation.
//!
//! # References
//!
//! - Dijkstra (1959), "A Note on Two Problems in Connexion with Graphs"
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Russell & Norvig (2020), *Artificial Intelligence: A Modern
//!   Approach*, 4th ed., ch. 3

mod frontier;
mod node;
mod runner;
mod types;

pub use frontier::Frontier;
pub use node::{NodeArena, NodeId, SearchNode};
pub use runner::{SearchResult, SearchRunner, Solution};
pub use types::{SearchProblem, Successor};
