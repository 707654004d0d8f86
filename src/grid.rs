//! Turning a traversability Grid into a Graph

use crate::{Cost, GridNode, NodeGraph, NodeID, Point, SearchNode};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// The 8 surrounding Tiles, in scanline order. Edge insertion follows this order, which
// makes NodeID-level tie-breaking in the search deterministic.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl NodeGraph<GridNode> {
    /// Builds the Graph for a `width` x `height` Grid.
    ///
    /// Every cell becomes a Node, walkable or not, so every in-bounds Position is
    /// addressable. Each walkable cell gets a directed Edge to each of its up to 8
    /// in-bounds walkable neighbors, costing `1.0` for cardinal and `sqrt(2)` for diagonal
    /// steps. Walls get no outgoing Edges and receive none, which keeps them out of every
    /// Path without special-casing them in the search.
    ///
    /// Since both endpoints of an Edge have to be walkable, construction is symmetric and
    /// the resulting Graph is effectively undirected.
    ///
    /// With the `parallel` feature (enabled by default), the Edge scan runs on the rayon
    /// thread pool. The Graph is complete before this function returns either way.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// use pixel_pathfinding::prelude::*;
    ///
    /// // 0 = walkable, 1 = wall
    /// let grid = [
    ///     [0, 1, 0],
    ///     [0, 0, 0],
    ///     [0, 1, 0],
    /// ];
    /// let graph = NodeGraph::from_grid((3, 3), |(x, y)| grid[y][x] == 0);
    ///
    /// assert_eq!(graph.len(), 9);
    /// ```
    pub fn from_grid(
        (width, height): (usize, usize),
        is_walkable: impl Fn(Point) -> bool + Sync,
    ) -> Self {
        let mut graph = NodeGraph::new();
        for y in 0..height {
            for x in 0..width {
                graph.add_node(GridNode::new((x, y), is_walkable((x, y))));
            }
        }

        // Every cell only writes its own Edge list, so the scan parallelizes cleanly.
        #[cfg(feature = "parallel")]
        let edge_lists: Vec<_> = (0..width * height)
            .into_par_iter()
            .map(|i| cell_edges((width, height), &graph, (i % width, i / width)))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let edge_lists: Vec<_> = (0..width * height)
            .map(|i| cell_edges((width, height), &graph, (i % width, i / width)))
            .collect();

        for (src, edges) in edge_lists.into_iter().enumerate() {
            for (target, cost) in edges {
                graph.add_edge(src, target, cost);
            }
        }
        graph
    }
}

fn cell_edges(
    (width, height): (usize, usize),
    graph: &NodeGraph<GridNode>,
    (x, y): Point,
) -> Vec<(NodeID, Cost)> {
    let src_id = graph.id_at((x, y)).unwrap();
    let src = &graph[src_id];
    if !src.is_walkable() {
        return Vec::new();
    }

    NEIGHBORS
        .iter()
        .filter_map(|&(dx, dy)| {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 || nx as usize >= width || ny as usize >= height {
                return None;
            }
            let target_id = graph.id_at((nx as usize, ny as usize))?;
            let target = &graph[target_id];
            if !target.is_walkable() {
                return None;
            }
            Some((target_id, src.local_cost(target)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::SQRT_2;

    fn open_3x3() -> NodeGraph<GridNode> {
        NodeGraph::from_grid((3, 3), |_| true)
    }

    #[test]
    fn every_cell_becomes_a_node() {
        let graph = open_3x3();

        assert_eq!(graph.len(), 9);
        for y in 0..3 {
            for x in 0..3 {
                assert!(graph.id_at((x, y)).is_some());
            }
        }
        assert_eq!(graph.id_at((3, 0)), None);
        assert_eq!(graph.id_at((0, 3)), None);
    }

    #[test]
    fn neighbor_counts_at_borders() {
        let graph = open_3x3();

        let corner = graph.id_at((0, 0)).unwrap();
        let border = graph.id_at((1, 0)).unwrap();
        let center = graph.id_at((1, 1)).unwrap();

        assert_eq!(graph.neighbors(corner).len(), 3);
        assert_eq!(graph.neighbors(border).len(), 5);
        assert_eq!(graph.neighbors(center).len(), 8);
    }

    #[test]
    fn edge_costs_are_geometric() {
        let graph = open_3x3();
        let center = graph.id_at((1, 1)).unwrap();

        for &(target, cost) in graph.neighbors(center) {
            let (x, y) = graph[target].pos();
            if x != 1 && y != 1 {
                assert_eq!(cost, SQRT_2);
            } else {
                assert_eq!(cost, 1.0);
            }
        }
    }

    #[test]
    fn walls_are_isolated() {
        // wall in the center
        let graph = NodeGraph::from_grid((3, 3), |pos| pos != (1, 1));
        let wall = graph.id_at((1, 1)).unwrap();

        assert!(graph.neighbors(wall).is_empty());
        for (id, _) in graph.iter() {
            assert!(graph.neighbors(id).iter().all(|&(target, _)| target != wall));
        }
    }

    #[test]
    fn construction_is_symmetric() {
        let grid = [[0, 1, 0], [0, 0, 0], [1, 0, 0]];
        let graph = NodeGraph::from_grid((3, 3), |(x, y)| grid[y][x] == 0);

        for (id, _) in graph.iter() {
            for &(target, cost) in graph.neighbors(id) {
                let back = graph
                    .neighbors(target)
                    .iter()
                    .find(|&&(other, _)| other == id);
                assert_eq!(back, Some(&(id, cost)));
            }
        }
    }
}
