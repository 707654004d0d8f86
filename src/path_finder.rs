use crate::{NodeGraph, Point, SearchNode, SearchResult, SearchStrategy};

use std::error::Error;
use std::fmt;

/// The error cases of [`PathFinder::find_path`].
///
/// Note that a Goal that merely cannot be reached is *not* an error; it is reported
/// through [`SearchResult::success`]. Errors are reserved for requests the search could
/// never answer, and are surfaced before the search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// the given Point has no Node in the Graph (outside the Grid)
    InvalidCoordinate(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathError::InvalidCoordinate((x, y)) => {
                write!(fmt, "no Node at ({}, {})", x, y)
            }
        }
    }
}

impl Error for PathError {}

/// Binds a (Start, Goal) pair and searches Paths between them.
///
/// The PathFinder is the main entry point of the crate: it resolves the two Positions to
/// Nodes, rejects Positions outside the Graph, and hands the actual work to an exchangeable
/// [`SearchStrategy`] ([`AStar`](crate::AStar) in the common case).
///
/// Neither the PathFinder nor the strategies mutate the Graph, so one PathFinder may be
/// reused for any number of searches.
///
/// ## Examples
/// Basic usage:
/// ```
/// use pixel_pathfinding::prelude::*;
///
/// // 0 = walkable, 1 = wall
/// let grid = [
///     [0, 0, 0],
///     [0, 1, 0],
///     [0, 0, 0],
/// ];
/// let graph = NodeGraph::from_grid((3, 3), |(x, y)| grid[y][x] == 0);
///
/// let finder = PathFinder::new((0, 0), (2, 2));
/// let result = finder.find_path(&graph, &AStar).unwrap();
///
/// assert!(result.success);
/// // around the blocked center: 1 + sqrt(2) + 1
/// assert!((result.cost() - (2.0 + std::f32::consts::SQRT_2)).abs() < 1e-5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathFinder {
    start: Point,
    goal: Point,
}

impl PathFinder {
    /// Creates a PathFinder for the given Start and Goal Positions.
    pub fn new(start: Point, goal: Point) -> PathFinder {
        PathFinder { start, goal }
    }

    /// The bound Start Position.
    pub fn start(&self) -> Point {
        self.start
    }

    /// The bound Goal Position.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Searches a Path from Start to Goal on `graph` using `strategy`.
    ///
    /// Fails with [`PathError::InvalidCoordinate`] if either Position has no Node in the
    /// Graph; this is checked before the search begins. A Goal that exists but cannot be
    /// reached yields `Ok` with [`SearchResult::success`] set to `false`.
    pub fn find_path<N, S>(&self, graph: &NodeGraph<N>, strategy: &S) -> Result<SearchResult, PathError>
    where
        N: SearchNode,
        S: SearchStrategy<N>,
    {
        let start = graph
            .id_at(self.start)
            .ok_or(PathError::InvalidCoordinate(self.start))?;
        let goal = graph
            .id_at(self.goal)
            .ok_or(PathError::InvalidCoordinate(self.goal))?;

        Ok(strategy.search(graph, start, goal))
    }
}
