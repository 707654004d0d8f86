#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find Shortest Paths on Grids derived from Images.
//!
//! ## Introduction
//! The typical use case of this crate is an image where every Pixel is a Tile that is either
//! walkable or a wall, and where the task is to find the cheapest walk between two Pixels.
//! Movement is allowed to all 8 surrounding Tiles, costing `1.0` for the 4 cardinal steps
//! and `sqrt(2)` for the diagonal ones, so the cost of a Path is its geometric length.
//!
//! The crate never looks at an actual image. The Grid is handed over as a size and a
//! function that answers "is this Tile walkable?", leaving the decoding of image formats,
//! the rendering of results and the parsing of arguments entirely to the caller. This
//! allows the Grid to be stored in any format (Array, Vec, decoded image buffer, ...), as
//! long as a specific (x, y) can be queried.
//!
//! Internally, every Tile becomes a Node in an arena-backed Graph, and Paths are searched
//! on that Graph with the A* Algorithm. The Graph is immutable during a search; all
//! bookkeeping of the search lives in per-search storage, so several searches may run over
//! the same Graph.
//!
//! ## Examples
//! Building the Graph:
//! ```
//! use pixel_pathfinding::prelude::*;
//!
//! // create and initialize Grid
//! // 0 = walkable, 1 = wall
//! let grid = [
//!     [0, 1, 0, 0, 0],
//!     [0, 1, 1, 1, 0],
//!     [0, 0, 0, 1, 0],
//!     [0, 1, 0, 1, 0],
//!     [0, 1, 0, 0, 0],
//! ];
//! let (width, height) = (grid[0].len(), grid.len());
//!
//! let graph = NodeGraph::from_grid((width, height), |(x, y)| grid[y][x] == 0);
//!
//! assert_eq!(graph.len(), width * height);
//! ```
//! Finding a Path:
//! ```
//! # use pixel_pathfinding::prelude::*;
//! #
//! # // create and initialize Grid
//! # // 0 = walkable, 1 = wall
//! # let grid = [
//! #     [0, 1, 0, 0, 0],
//! #     [0, 1, 1, 1, 0],
//! #     [0, 0, 0, 1, 0],
//! #     [0, 1, 0, 1, 0],
//! #     [0, 1, 0, 0, 0],
//! # ];
//! # let (width, height) = (grid[0].len(), grid.len());
//! #
//! # let graph = NodeGraph::from_grid((width, height), |(x, y)| grid[y][x] == 0);
//! #
//! let finder = PathFinder::new((0, 0), (4, 4));
//! let result = finder.find_path(&graph, &AStar).unwrap();
//!
//! assert!(result.success);
//! assert_eq!(result.path[0], (0, 0));
//! assert_eq!(result.path[result.path.len() - 1], (4, 4));
//! ```
//! An unreachable Goal is a normal outcome, not an error:
//! ```
//! # use pixel_pathfinding::prelude::*;
//! #
//! // a solid wall cuts the Grid in two
//! let grid = [
//!     [0, 0, 0],
//!     [1, 1, 1],
//!     [0, 0, 0],
//! ];
//! let graph = NodeGraph::from_grid((3, 3), |(x, y)| grid[y][x] == 0);
//!
//! let result = PathFinder::new((0, 0), (1, 2)).find_path(&graph, &AStar).unwrap();
//!
//! assert!(!result.success);
//! assert!(result.path.is_empty());
//! ```
//! Coordinates outside the Grid on the other hand are rejected before the search starts:
//! ```
//! # use pixel_pathfinding::prelude::*;
//! # let graph = NodeGraph::from_grid((3, 3), |_| true);
//! let result = PathFinder::new((0, 0), (7, 7)).find_path(&graph, &AStar);
//!
//! assert_eq!(result.unwrap_err(), PathError::InvalidCoordinate((7, 7)));
//! ```

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// The Type used for the Cost of traversing an Edge or a Path
pub type Cost = f32;

/// A specialized HashMap for Points
pub type PointMap<V> = hashbrown::HashMap<Point, V>;
/// A specialized HashSet of Points
pub type PointSet = hashbrown::HashSet<Point>;

mod node_id;
pub use self::node_id::{NodeID, NodeIDHasher, NodeIDMap, NodeIDSet};

mod node;
pub use self::node::{GridNode, SearchNode};

mod graph;
pub use self::graph::NodeGraph;

mod grid;

mod path;
pub use self::path::Path;

pub mod search;
pub use self::search::{AStar, SearchResult, SearchStats, SearchStrategy, UniformCost};

mod path_finder;
pub use self::path_finder::{PathError, PathFinder};

/// Everything needed for the common use cases of this crate
pub mod prelude {
    pub use crate::{
        AStar, Cost, GridNode, NodeGraph, Path, PathError, PathFinder, Point, SearchNode,
        SearchResult, SearchStrategy, UniformCost,
    };
}
