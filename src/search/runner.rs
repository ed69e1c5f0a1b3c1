//! The shared expansion loop and the four search entry points.

use std::collections::HashSet;

use super::frontier::Frontier;
use super::node::NodeArena;
use super::types::SearchProblem;

/// A reconstructed solution path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<A> {
    /// Actions from the start state to the goal, in execution order.
    /// Empty when the start state already satisfies the goal.
    pub actions: Vec<A>,
    /// Cumulative cost of the path.
    pub cost: f64,
}

/// Result of a search run.
///
/// Exhausting the frontier without reaching a goal is a normal terminal
/// outcome, reported as `solution: None`, never as a panic or an error
/// value.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<A> {
    /// The solution path, or `None` if the frontier emptied first.
    pub solution: Option<Solution<A>>,
    /// Number of states expanded (closed-set size on termination).
    pub expanded: usize,
    /// Number of nodes created, including the root.
    pub generated: usize,
    /// Pops discarded because their state had already been expanded.
    pub duplicates_skipped: usize,
    /// Largest frontier size observed.
    pub frontier_peak: usize,
}

impl<A> SearchResult<A> {
    /// Whether a goal was reached.
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Executes the search algorithms.
///
/// All four strategies run the same graph-search loop and differ only in
/// frontier discipline and priority key. Each invocation owns its node
/// arena, frontier, and closed set, so independent searches can run
/// concurrently without synchronization.
pub struct SearchRunner;

impl SearchRunner {
    /// Depth-first graph search.
    ///
    /// Explores with a LIFO frontier and returns the first solution
    /// popped. Neither path cost nor path length is minimized.
    pub fn dfs<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
        run(problem, Frontier::lifo(), |_, _, _| 0.0)
    }

    /// Breadth-first graph search.
    ///
    /// Explores with a FIFO frontier. The returned solution has the
    /// fewest actions of any solution; its cost is minimal only when all
    /// action costs are equal.
    pub fn bfs<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
        run(problem, Frontier::fifo(), |_, _, _| 0.0)
    }

    /// Uniform-cost graph search.
    ///
    /// Explores with a best-first frontier keyed by cumulative path
    /// cost. The returned solution has minimal cumulative cost among all
    /// paths to any goal, provided action costs are non-negative.
    pub fn ucs<P: SearchProblem>(problem: &P) -> SearchResult<P::Action> {
        run(problem, Frontier::best_first(), |_, _, cost| cost)
    }

    /// A* graph search with a pluggable heuristic.
    ///
    /// Explores with a best-first frontier keyed by cumulative path cost
    /// plus `heuristic(state, problem)`. With an admissible heuristic
    /// (never overestimating the true remaining cost) and non-negative
    /// action costs, the returned solution has minimal cumulative cost.
    ///
    /// States close permanently on first expansion and are never
    /// re-opened. Under a consistent heuristic no state ever needs
    /// re-expansion, so this is lossless; under a merely admissible but
    /// inconsistent heuristic it can return a suboptimal solution.
    /// Prefer consistent heuristics.
    pub fn astar<P, H>(problem: &P, heuristic: H) -> SearchResult<P::Action>
    where
        P: SearchProblem,
        H: Fn(&P::State, &P) -> f64,
    {
        run(problem, Frontier::best_first(), move |p, state, cost| {
            cost + heuristic(state, p)
        })
    }
}

/// The shared pop/expand/push loop.
///
/// `priority` maps (problem, state, cumulative cost) to the frontier key
/// of a pushed node; the LIFO and FIFO disciplines ignore it.
fn run<P, K>(problem: &P, mut frontier: Frontier, priority: K) -> SearchResult<P::Action>
where
    P: SearchProblem,
    K: Fn(&P, &P::State, f64) -> f64,
{
    let mut arena: NodeArena<P::State, P::Action> = NodeArena::new();
    let mut closed: HashSet<P::State> = HashSet::new();
    let mut duplicates_skipped = 0;

    let start = problem.start_state();
    let root_key = priority(problem, &start, 0.0);
    let root = arena.root(start);
    frontier.push(root, root_key);

    while let Some(id) = frontier.pop() {
        let (state, cost) = {
            let node = &arena[id];
            (node.state.clone(), node.cumulative_cost)
        };

        if problem.is_goal(&state) {
            return SearchResult {
                solution: Some(Solution {
                    actions: arena.actions_to(id),
                    cost,
                }),
                expanded: closed.len(),
                generated: arena.len(),
                duplicates_skipped,
                frontier_peak: frontier.peak(),
            };
        }

        // Graph search: each state is expanded at most once. A later,
        // possibly cheaper rediscovery of a closed state is discarded.
        if !closed.insert(state.clone()) {
            duplicates_skipped += 1;
            continue;
        }

        for successor in problem.expand(&state) {
            let child = arena.child(successor.state, id, successor.action, successor.cost);
            let node = &arena[child];
            let key = priority(problem, &node.state, node.cumulative_cost);
            frontier.push(child, key);
        }
    }

    SearchResult {
        solution: None,
        expanded: closed.len(),
        generated: arena.len(),
        duplicates_skipped,
        frontier_peak: frontier.peak(),
    }
}
