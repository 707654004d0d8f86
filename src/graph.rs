use crate::{Cost, NodeID, Point, PointMap, SearchNode};

#[derive(Clone, Debug)]
struct Entry<N> {
    node: N,
    edges: Vec<(NodeID, Cost)>,
}

/// An arena of Nodes with their weighted Edges.
///
/// Nodes are owned exclusively by the Graph and referenced by [`NodeID`] everywhere else.
/// Edges and the predecessor links produced during a search are stored as NodeIDs as well,
/// so the mutually-referencing neighbor structure never forms an ownership cycle.
///
/// The topology is write-once: Nodes and Edges are added during construction and then only
/// read. Searches keep their own bookkeeping and never touch the Graph itself.
#[derive(Clone, Debug)]
pub struct NodeGraph<N> {
    nodes: slab::Slab<Entry<N>>,
    pos_map: PointMap<NodeID>,
}

impl<N: SearchNode> NodeGraph<N> {
    /// Creates an empty NodeGraph.
    pub fn new() -> Self {
        NodeGraph {
            nodes: slab::Slab::default(),
            pos_map: PointMap::default(),
        }
    }

    /// The number of Nodes in the Graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Graph has no Nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a Node and returns its ID.
    ///
    /// IDs are handed out in insertion order, starting at 0.
    pub fn add_node(&mut self, node: N) -> NodeID {
        let pos = node.pos();
        let id = self.nodes.insert(Entry {
            node,
            edges: Vec::new(),
        });
        self.pos_map.insert(pos, id);
        id
    }

    /// Adds a directed Edge from `src` to `target` with the given cost.
    ///
    /// The Graph does not mirror the Edge; symmetric construction is the builder's job.
    ///
    /// ## Panics
    /// Panics if either ID is unknown, if `cost` is negative, if `src == target`, or if
    /// the Edge already exists. A Graph violating any of these would silently break the
    /// search, so they are rejected at construction time.
    #[track_caller]
    pub fn add_edge(&mut self, src: NodeID, target: NodeID, cost: Cost) {
        assert!(cost >= 0.0, "negative Edge cost: {}", cost);
        assert!(src != target, "self-Edge on Node {}", src);
        assert!(self.nodes.contains(target), "unknown target Node {}", target);

        let entry = &mut self.nodes[src];
        assert!(
            entry.edges.iter().all(|&(id, _)| id != target),
            "duplicate Edge {} -> {}",
            src,
            target
        );
        entry.edges.push((target, cost));
    }

    /// The Node behind `id`, if it exists.
    pub fn get(&self, id: NodeID) -> Option<&N> {
        self.nodes.get(id).map(|entry| &entry.node)
    }

    /// The outgoing Edges of a Node as (target, cost) pairs, in insertion order.
    #[track_caller]
    pub fn neighbors(&self, id: NodeID) -> &[(NodeID, Cost)] {
        &self.nodes[id].edges
    }

    /// Looks up the ID of the Node at a Position.
    pub fn id_at(&self, pos: Point) -> Option<NodeID> {
        self.pos_map.get(&pos).copied()
    }

    /// An Iterator over all (ID, Node) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeID, &N)> {
        self.nodes.iter().map(|(id, entry)| (id, &entry.node))
    }
}

impl<N: SearchNode> Default for NodeGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

use std::ops::Index;
impl<N: SearchNode> Index<NodeID> for NodeGraph<N> {
    type Output = N;
    #[track_caller]
    fn index(&self, index: NodeID) -> &N {
        &self.nodes[index].node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridNode;

    fn three_nodes() -> (NodeGraph<GridNode>, NodeID, NodeID, NodeID) {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(GridNode::new((0, 0), true));
        let b = graph.add_node(GridNode::new((1, 0), true));
        let c = graph.add_node(GridNode::new((1, 1), true));
        (graph, a, b, c)
    }

    #[test]
    fn add_and_lookup() {
        let (graph, a, b, c) = three_nodes();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.id_at((0, 0)), Some(a));
        assert_eq!(graph.id_at((1, 0)), Some(b));
        assert_eq!(graph.id_at((1, 1)), Some(c));
        assert_eq!(graph.id_at((5, 5)), None);
        assert_eq!(graph[b].pos(), (1, 0));
    }

    #[test]
    fn edges_are_directed() {
        let (mut graph, a, b, _) = three_nodes();
        graph.add_edge(a, b, 1.0);

        assert_eq!(graph.neighbors(a), &[(b, 1.0)]);
        assert!(graph.neighbors(b).is_empty());
    }

    #[test]
    #[should_panic(expected = "negative Edge cost")]
    fn negative_cost_rejected() {
        let (mut graph, a, b, _) = three_nodes();
        graph.add_edge(a, b, -1.0);
    }

    #[test]
    #[should_panic(expected = "self-Edge")]
    fn self_edge_rejected() {
        let (mut graph, a, _, _) = three_nodes();
        graph.add_edge(a, a, 1.0);
    }

    #[test]
    #[should_panic(expected = "duplicate Edge")]
    fn duplicate_edge_rejected() {
        let (mut graph, a, b, _) = three_nodes();
        graph.add_edge(a, b, 1.0);
        graph.add_edge(a, b, 2.0);
    }

    #[test]
    #[should_panic(expected = "unknown target Node")]
    fn dangling_edge_rejected() {
        let (mut graph, a, _, _) = three_nodes();
        graph.add_edge(a, 17, 1.0);
    }
}
