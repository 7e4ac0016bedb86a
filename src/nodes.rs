//! Insertion-ordered identifier map joining report hits to contig headers.

use crate::hits::Hit;

/// Maps each hit's node name to the hit it came from.
///
/// Iteration follows insertion order of first occurrence, which makes the
/// header tie-break in the extraction scan deterministic. Inserting a node
/// that is already present keeps its position and replaces the stored hit
/// (last write wins) — the documented overwrite policy for reports that list
/// the same node more than once.
#[derive(Clone, Debug, Default)]
pub struct NodeMap {
    entries: Vec<(String, Hit)>,
}

impl NodeMap {
    /// Build the map in one pass over the hits, keying each on its first
    /// delimiter-separated field.
    pub fn from_hits(hits: &[Hit], delimiter: &str) -> Self {
        let mut map = Self::default();
        for hit in hits {
            map.insert(hit.node(delimiter).to_string(), hit.clone());
        }
        map
    }

    /// Insert a node, replacing the stored hit when the node is already
    /// present.
    pub fn insert(&mut self, node: String, hit: Hit) {
        match self.entries.iter_mut().find(|e| e.0 == node) {
            Some(entry) => entry.1 = hit,
            None => self.entries.push((node, hit)),
        }
    }

    pub fn get(&self, node: &str) -> Option<&Hit> {
        self.entries.iter().find(|e| e.0 == node).map(|e| &e.1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Nodes and their hits, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Hit)> {
        self.entries.iter().map(|(node, hit)| (node.as_str(), hit))
    }
}
