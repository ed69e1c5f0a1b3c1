//! Criterion benchmarks for the search strategies.
//!
//! Uses a synthetic open-grid quest to measure pure engine overhead
//! independent of any domain: no walls, so frontier and closed-set
//! bookkeeping dominate.

use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_statesearch::heuristics::{
    farthest_goal_heuristic, null_heuristic, weighted_manhattan_heuristic, Direction,
    DirectionCosts, GridProblem, GridState, Position,
};
use u_statesearch::search::{SearchProblem, SearchRunner, Successor};

// ===========================================================================
// Open-grid quest: collect every goal on a bounded grid
// ===========================================================================

struct GridQuest {
    width: i64,
    height: i64,
    walls: HashSet<Position>,
    start: Position,
    goals: Vec<Position>,
    costs: DirectionCosts,
}

impl SearchProblem for GridQuest {
    type State = GridState;
    type Action = Direction;

    fn start_state(&self) -> GridState {
        GridState::new(self.start, self.goals.clone())
    }

    fn is_goal(&self, state: &GridState) -> bool {
        state.remaining_goals.is_empty()
    }

    fn expand(&self, state: &GridState) -> Vec<Successor<GridState, Direction>> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                let next = state.position.step(direction);
                let blocked = next.x < 0
                    || next.y < 0
                    || next.x >= self.width
                    || next.y >= self.height
                    || self.walls.contains(&next);
                if blocked {
                    return None;
                }
                let remaining = state
                    .remaining_goals
                    .iter()
                    .copied()
                    .filter(|&goal| goal != next)
                    .collect();
                Some(Successor {
                    state: GridState::new(next, remaining),
                    action: direction,
                    cost: self.costs.cost(direction),
                })
            })
            .collect()
    }
}

impl GridProblem for GridQuest {
    fn direction_costs(&self) -> DirectionCosts {
        self.costs
    }
}

fn corner_quest(size: i64, costs: DirectionCosts) -> GridQuest {
    GridQuest {
        width: size,
        height: size,
        walls: HashSet::new(),
        start: Position::new(size - 1, size - 1),
        goals: vec![Position::new(0, 0)],
        costs,
    }
}

fn bench_uninformed(c: &mut Criterion) {
    let mut group = c.benchmark_group("uninformed");
    for size in [8i64, 16, 24] {
        let quest = corner_quest(size, DirectionCosts::UNIT);

        group.bench_with_input(BenchmarkId::new("bfs", size), &quest, |b, q| {
            b.iter(|| SearchRunner::bfs(black_box(q)))
        });
        group.bench_with_input(BenchmarkId::new("ucs", size), &quest, |b, q| {
            b.iter(|| SearchRunner::ucs(black_box(q)))
        });
    }
    group.finish();
}

fn bench_informed(c: &mut Criterion) {
    let costs = DirectionCosts {
        north: 4.0,
        south: 3.0,
        east: 2.0,
        west: 1.0,
    };

    let mut group = c.benchmark_group("informed");
    for size in [8i64, 16, 24] {
        let mut quest = corner_quest(size, costs);
        quest.goals = vec![Position::new(0, 0), Position::new(0, size - 1)];

        group.bench_with_input(BenchmarkId::new("astar_null", size), &quest, |b, q| {
            b.iter(|| SearchRunner::astar(black_box(q), null_heuristic))
        });
        group.bench_with_input(BenchmarkId::new("astar_weighted", size), &quest, |b, q| {
            b.iter(|| SearchRunner::astar(black_box(q), weighted_manhattan_heuristic))
        });
        group.bench_with_input(BenchmarkId::new("astar_farthest", size), &quest, |b, q| {
            b.iter(|| SearchRunner::astar(black_box(q), farthest_goal_heuristic))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_uninformed, bench_informed);
criterion_main!(benches);
