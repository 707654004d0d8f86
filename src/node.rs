//! The Node abstraction that the search is generic over

use crate::{Cost, Point};
use std::fmt::Debug;

/// An addressable point in the search space.
///
/// The search core never assumes Nodes come from a Grid. Any type that can report its
/// Position, the exact cost of stepping to an adjacent Node and an estimate of the
/// remaining cost to an arbitrary Node can be searched.
///
/// For the search to be correct, implementations have to uphold two properties:
/// - [`local_cost`](SearchNode::local_cost) returns a non-negative value
/// - [`heuristic`](SearchNode::heuristic) is **admissible** (never overestimates the true
///   remaining cost) and **consistent** (satisfies the triangle inequality across Edges).
///
/// Admissibility makes the returned Path optimal; consistency guarantees that a Node is
/// never expanded twice. A heuristic of constant `0.0` is always valid and turns A* into
/// a uniform-cost search.
pub trait SearchNode {
    /// The Position of this Node on the Grid
    fn pos(&self) -> Point;

    /// The exact cost of the Edge from this Node to an adjacent one.
    ///
    /// Only called for Nodes that are actually adjacent. For the Grid case this is `1.0`
    /// for the 4 cardinal neighbors and `sqrt(2)` for the diagonal ones.
    fn local_cost(&self, other: &Self) -> Cost;

    /// An admissible, consistent estimate of the remaining cost from this Node to `other`.
    ///
    /// `other` may be any Node of the Graph, not just an adjacent one.
    fn heuristic(&self, other: &Self) -> Cost;
}

/// A Node of a Grid derived from an Image.
///
/// One Pixel of the source image, either walkable or a wall. The distance metrics are the
/// geometric ones: steps cost their length, the heuristic is the Euclidean distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridNode {
    pos: Point,
    walkable: bool,
}

impl GridNode {
    /// Creates a new GridNode at `pos`.
    pub fn new(pos: Point, walkable: bool) -> GridNode {
        GridNode { pos, walkable }
    }

    /// `true` if this Tile may be part of a Path.
    ///
    /// Only the Graph construction looks at this; once the Edges are wired, walls are
    /// simply Nodes without Edges.
    pub fn is_walkable(&self) -> bool {
        self.walkable
    }
}

impl SearchNode for GridNode {
    fn pos(&self) -> Point {
        self.pos
    }

    // A diagonal step costs sqrt(2), a cardinal one 1
    fn local_cost(&self, other: &Self) -> Cost {
        let (x, y) = self.pos;
        let (ox, oy) = other.pos;
        if x != ox && y != oy {
            std::f32::consts::SQRT_2
        } else {
            1.0
        }
    }

    fn heuristic(&self, other: &Self) -> Cost {
        let dx = self.pos.0 as isize - other.pos.0 as isize;
        let dy = self.pos.1 as isize - other.pos.1 as isize;
        ((dx * dx + dy * dy) as Cost).sqrt()
    }
}
