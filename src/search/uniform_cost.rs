use super::{reconstruct_path, Element, SearchResult, SearchStats, SearchStrategy};
use crate::{Cost, NodeGraph, NodeID, NodeIDMap, NodeIDSet, Path, SearchNode};

use std::collections::BinaryHeap;
use std::time::Instant;

/// Uniform-cost search ([Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// towards a single Goal).
///
/// Behaves like [`AStar`](crate::AStar) with a heuristic of constant `0.0`: Nodes are
/// expanded purely by accumulated cost. It finds the same (optimal) Path cost while
/// expanding more Nodes, which makes it a useful reference to check a heuristic against,
/// and a drop-in [`SearchStrategy`] where no sensible heuristic exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformCost;

impl<N: SearchNode> SearchStrategy<N> for UniformCost {
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

        let mut visited: NodeIDMap<(Cost, NodeID)> = NodeIDMap::default();
        let mut closed = NodeIDSet::default();
        let mut open = BinaryHeap::new();
        let mut seq = 0u64;

        visited.insert(start, (0.0, start));
        open.push(Element {
            id: start,
            g: 0.0,
            seq,
        });

        let mut success = false;
        while let Some(Element { id, g, .. }) = open.pop() {
            if id == goal {
                success = true;
                break;
            }
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

                seq += 1;
                open.push(Element {
                    id: target,
                    g: tentative,
                    seq,
                });
            }
        }

        stats.elapsed = timer.elapsed();
        #[cfg(feature = "log")]
        log::debug!(
            "uniform_cost: success = {}, {} Nodes expanded in {:?}",
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
