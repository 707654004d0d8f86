use super::{reconstruct_path, HeuristicElement, SearchResult, SearchStats, SearchStrategy};
use crate::{Cost, NodeGraph, NodeID, NodeIDMap, NodeIDSet, Path, SearchNode};

use std::collections::BinaryHeap;
use std::time::Instant;

/// The [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// Explores the Graph guided by `f = g + h`, where `g` is the accumulated cost from the
/// Start and `h` is the Node's [`heuristic`](SearchNode::heuristic) towards the Goal. With
/// an admissible heuristic the returned Path is the cheapest one; with a consistent
/// heuristic every Node is expanded at most once, giving `O(E log V)` over a binary heap.
///
/// Given the same Graph and endpoints, the search always returns the same Path: equally
/// cheap candidates are expanded by smaller `h` first, then in insertion order.
///
/// ## Examples
/// Basic usage:
/// ```
/// use pixel_pathfinding::prelude::*;
///
/// let graph = NodeGraph::from_grid((3, 3), |_| true);
/// let start = (0, 0);
/// let goal = (2, 2);
///
/// let result = PathFinder::new(start, goal).find_path(&graph, &AStar).unwrap();
///
/// assert!(result.success);
/// assert_eq!(result.path, vec![(0, 0), (1, 1), (2, 2)]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AStar;

impl<N: SearchNode> SearchStrategy<N> for AStar {
    fn search(&self, graph: &NodeGraph<N>, start: NodeID, goal: NodeID) -> SearchResult {
        let timer = Instant::now();
        let mut stats = SearchStats::default();

        if start == goal {
            stats.elapsed = timer.elapsed();
            return SearchResult {
                success: true,
                path: Path::new(vec![graph[start].pos()], 0.0),
                stats,
            };
        }

        let goal_node = &graph[goal];

        // All search scratch lives here, keyed by NodeID; the Graph itself is never touched.
        let mut visited: NodeIDMap<(Cost, NodeID)> = NodeIDMap::default();
        let mut closed = NodeIDSet::default();
        let mut open = BinaryHeap::new();
        let mut seq = 0u64;

        visited.insert(start, (0.0, start));
        let h = graph[start].heuristic(goal_node);
        open.push(HeuristicElement {
            id: start,
            g: 0.0,
            h,
            f: h,
            seq,
        });

        let mut success = false;
        while let Some(HeuristicElement { id, g, .. }) = open.pop() {
            if id == goal {
                success = true;
                break;
            }
            // re-pushed Nodes leave stale entries in the heap; the first pop finalizes
            if !closed.insert(id) {
                continue;
            }
            stats.expanded += 1;

            for &(target, cost) in graph.neighbors(id) {
                if closed.contains(&target) {
                    continue;
                }
                let tentative = g + cost;

                match visited.get_mut(&target) {
                    Some((best, parent)) => {
                        if tentative < *best {
                            *best = tentative;
                            *parent = id;
                        } else {
                            continue;
                        }
                    }
                    None => {
                        visited.insert(target, (tentative, id));
                    }
                }

                let h = graph[target].heuristic(goal_node);
                seq += 1;
                open.push(HeuristicElement {
                    id: target,
                    g: tentative,
                    h,
                    f: tentative + h,
                    seq,
                });
            }
        }

        stats.elapsed = timer.elapsed();
        #[cfg(feature = "log")]
        log::debug!(
            "a_star: success = {}, {} Nodes expanded in {:?}",
            success,
            stats.expanded,
            stats.elapsed
        );

        let path = if success {
            reconstruct_path(graph, &visited, start, goal)
        } else {
            Path::empty()
        };
        SearchResult {
            success,
            path,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridNode;

    fn search(graph: &NodeGraph<GridNode>, start: (usize, usize), goal: (usize, usize)) -> SearchResult {
        AStar.search(
            graph,
            graph.id_at(start).unwrap(),
            graph.id_at(goal).unwrap(),
        )
    }

    #[test]
    fn start_is_goal() {
        let graph = NodeGraph::from_grid((3, 3), |_| true);
        let result = search(&graph, (1, 1), (1, 1));

        assert!(result.success);
        assert_eq!(result.path, vec![(1, 1)]);
        assert_eq!(result.cost(), 0.0);
        assert_eq!(result.stats.expanded, 0);
    }

    #[test]
    fn open_grid_walks_the_diagonal() {
        let graph = NodeGraph::from_grid((3, 3), |_| true);
        let result = search(&graph, (0, 0), (2, 2));

        assert!(result.success);
        assert_eq!(result.path, vec![(0, 0), (1, 1), (2, 2)]);
        assert!((result.cost() - 2.0 * std::f32::consts::SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn unreachable_goal_is_a_result() {
        // goal walled in
        let graph = NodeGraph::from_grid((4, 4), |(x, y)| !(2..=3).contains(&x) || !(2..=3).contains(&y) || (x, y) == (3, 3));
        let result = search(&graph, (0, 0), (3, 3));

        assert!(!result.success);
        assert!(result.path.is_empty());
        assert_eq!(result.cost(), 0.0);
        assert!(result.stats.expanded > 0);
    }

    #[test]
    fn heuristic_prunes_expansions() {
        let graph = NodeGraph::from_grid((16, 16), |_| true);
        let start = graph.id_at((0, 8)).unwrap();
        let goal = graph.id_at((15, 8)).unwrap();

        let a_star = AStar.search(&graph, start, goal);
        let uniform = crate::UniformCost.search(&graph, start, goal);

        assert!(a_star.success && uniform.success);
        assert!((a_star.cost() - uniform.cost()).abs() < 1e-4);
        assert!(a_star.stats.expanded < uniform.stats.expanded);
    }
}
