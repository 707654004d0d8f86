//! The search strategies and the types describing their outcome

mod a_star;
pub use self::a_star::AStar;

mod uniform_cost;
pub use self::uniform_cost::UniformCost;

use crate::{Cost, NodeGraph, NodeID, NodeIDMap, Path, Point, SearchNode};
use std::time::Duration;

/// A strategy for finding the cheapest Path between two Nodes of a [`NodeGraph`].
///
/// Implementations read the Graph's topology and keep all of their bookkeeping in their
/// own storage, so a strategy may be re-invoked on the same Graph any number of times and
/// several searches may run over one Graph at once.
pub trait SearchStrategy<N: SearchNode> {
    /// Searches the cheapest Path from `start` to `goal`.
    ///
    /// Both IDs must have been handed out by `graph`. A Goal that cannot be reached is
    /// reported through [`SearchResult::success`], not as an error.
    fn search(&self, graph: &NodeGraph<N>, start: NodeID, goal: NodeID) -> SearchResult;
}

/// The outcome of one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// `false` if the Goal cannot be reached from the Start
    pub success: bool,
    /// the found Path, or an empty Path if `success` is `false`
    pub path: Path<Point>,
    /// diagnostic counters of the search
    pub stats: SearchStats,
}

impl SearchResult {
    /// The total Cost of the found Path (0 if the search failed).
    pub fn cost(&self) -> Cost {
        self.path.cost()
    }
}

/// Diagnostic counters of a single search, for timing and logging by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// the number of Nodes that were expanded (finalized and scanned for neighbors)
    pub expanded: usize,
    /// wall time spent inside the search
    pub elapsed: Duration,
}

use std::cmp::Ordering;

// Open-set entry of the A* heap. BinaryHeap is a max-heap, so the ordering is reversed:
// smallest f first, ties broken by smaller h, then by earlier insertion. The last step
// makes the expansion order (and with it the returned Path) fully deterministic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeuristicElement {
    pub id: NodeID,
    pub g: Cost,
    pub h: Cost,
    pub f: Cost,
    pub seq: u64,
}

impl Ord for HeuristicElement {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.f
            .total_cmp(&self.f)
            .then_with(|| rhs.h.total_cmp(&self.h))
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}
impl PartialOrd for HeuristicElement {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl PartialEq for HeuristicElement {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for HeuristicElement {}

// Open-set entry of the uniform-cost heap: smallest g first, then earliest insertion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Element {
    pub id: NodeID,
    pub g: Cost,
    pub seq: u64,
}

impl Ord for Element {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.g
            .total_cmp(&self.g)
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}
impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl PartialEq for Element {
    fn eq(&self, rhs: &Self) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}
impl Eq for Element {}

// Walks the predecessor links from goal back to start and reverses them into a Path.
// The start marks itself as its own predecessor.
pub(crate) fn reconstruct_path<N: SearchNode>(
    graph: &NodeGraph<N>,
    visited: &NodeIDMap<(Cost, NodeID)>,
    start: NodeID,
    goal: NodeID,
) -> Path<Point> {
    let mut steps = vec![];
    let mut current = goal;

    while current != start {
        steps.push(graph[current].pos());
        let (_, prev) = visited[&current];
        current = prev;
    }
    steps.push(graph[start].pos());
    steps.reverse();

    Path::new(steps, visited[&goal].0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn elem(f: Cost, h: Cost, seq: u64) -> HeuristicElement {
        HeuristicElement {
            id: seq as NodeID,
            g: f - h,
            h,
            f,
            seq,
        }
    }

    #[test]
    fn pops_smallest_f_first() {
        let mut heap = BinaryHeap::new();
        heap.push(elem(3.0, 1.0, 0));
        heap.push(elem(1.5, 1.0, 1));
        heap.push(elem(2.0, 1.0, 2));

        assert_eq!(heap.pop().unwrap().f, 1.5);
        assert_eq!(heap.pop().unwrap().f, 2.0);
        assert_eq!(heap.pop().unwrap().f, 3.0);
    }

    #[test]
    fn equal_f_breaks_ties_by_h() {
        let mut heap = BinaryHeap::new();
        heap.push(elem(2.0, 2.0, 0));
        heap.push(elem(2.0, 0.0, 1));
        heap.push(elem(2.0, 1.0, 2));

        assert_eq!(heap.pop().unwrap().h, 0.0);
        assert_eq!(heap.pop().unwrap().h, 1.0);
        assert_eq!(heap.pop().unwrap().h, 2.0);
    }

    #[test]
    fn equal_f_and_h_pop_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        for seq in 0..4 {
            heap.push(elem(2.0, 1.0, seq));
        }

        for seq in 0..4 {
            assert_eq!(heap.pop().unwrap().seq, seq);
        }
    }
}
