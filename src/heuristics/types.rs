//! Grid vocabulary shared by the distance heuristics.

use crate::search::SearchProblem;

/// A cell on a rectangular grid.
///
/// Screen-style axes: `x` grows eastward, `y` grows southward, so moving
/// north decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// Creates a position.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The adjacent position one step in `direction`.
    pub const fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.x, self.y - 1),
            Direction::South => Self::new(self.x, self.y + 1),
            Direction::East => Self::new(self.x + 1, self.y),
            Direction::West => Self::new(self.x - 1, self.y),
        }
    }

    /// Unweighted Manhattan distance to `other`.
    pub const fn manhattan_distance(self, other: Self) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// The four cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, in a fixed enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];
}

/// Per-direction step costs for axis-aligned grid movement.
///
/// Costs are charged per step and are axis-independent; diagonal
/// movement is not modeled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionCosts {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl DirectionCosts {
    /// Unit cost in every direction.
    pub const UNIT: Self = Self {
        north: 1.0,
        south: 1.0,
        east: 1.0,
        west: 1.0,
    };

    /// The step cost of moving in `direction`.
    pub const fn cost(&self, direction: Direction) -> f64 {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }
}

/// Agent position plus the goals still to be visited.
///
/// Serves directly as a [`SearchProblem::State`]: two states compare
/// equal exactly when the agent stands on the same cell with the same
/// goals outstanding. `remaining_goals` keeps its declaration order; the
/// single-goal heuristics read the first element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridState {
    pub position: Position,
    pub remaining_goals: Vec<Position>,
}

impl GridState {
    /// Creates a grid state.
    pub fn new(position: Position, remaining_goals: Vec<Position>) -> Self {
        Self {
            position,
            remaining_goals,
        }
    }
}

/// A search problem on a grid with per-direction movement costs.
///
/// The weighted heuristics read only this slice of the problem contract.
pub trait GridProblem: SearchProblem<State = GridState> {
    /// The movement cost table the problem charges per step.
    fn direction_costs(&self) -> DirectionCosts;
}
