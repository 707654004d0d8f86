//! A Module with some utilities for working with NodeIDs

use std::hash::{BuildHasherDefault, Hasher};

/// The Type used to reference a Node in the Graph.
///
/// NodeIDs are handed out by the Graph's arena and are only meaningful for the Graph that
/// created them.
pub type NodeID = usize;

/// A specialized [`HashMap`](std::collections::HashMap) for NodeIDs with a faster Hasher
pub type NodeIDMap<V> = std::collections::HashMap<NodeID, V, BuildHasherDefault<NodeIDHasher>>;
/// A specialized [`HashSet`](std::collections::HashSet) for NodeIDs with a faster Hasher
pub type NodeIDSet = std::collections::HashSet<NodeID, BuildHasherDefault<NodeIDHasher>>;

/// A [`Hasher`](Hasher) specialized on NodeIDs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeIDHasher(u64);

impl Hasher for NodeIDHasher {
    /// panics, since only NodeIDs are supposed to be used
    fn write(&mut self, _: &[u8]) {
        unreachable!("This Hasher only works with NodeIDs")
    }
    /// Writes a single NodeID into this hasher.
    fn write_usize(&mut self, id: NodeID) {
        self.0 = id as u64
    }
    fn write_u64(&mut self, id: u64) {
        self.0 = id
    }
    fn finish(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_roundtrip() {
        let mut map: NodeIDMap<&str> = NodeIDMap::default();
        map.insert(0, "a");
        map.insert(42, "b");

        assert_eq!(map.get(&0), Some(&"a"));
        assert_eq!(map.get(&42), Some(&"b"));
        assert_eq!(map.get(&1), None);
    }
}
