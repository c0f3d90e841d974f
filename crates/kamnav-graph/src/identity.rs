//! Identity mapping between visual elements and KAM elements.
//!
//! The host graph view knows nothing about KAM semantics, so every visual
//! node/edge created from the remote model is recorded here, both ways.
//! The forward direction (`kam id -> visual handle`) makes expansion
//! idempotent; the reverse direction serves the details presenter.
//!
//! A missing reverse lookup is a normal outcome, not an error: after a host
//! session restore the mapping is gone and the element simply cannot be
//! expanded or described.

use std::collections::HashMap;
use std::sync::Mutex;

use kamnav_client::{KamEdge, KamNode};

use crate::host::{EdgeAttributes, GraphHost, NodeAttributes, VisualEdgeId, VisualNodeId};

/// Outcome of a resolve-or-create call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved<T> {
    /// Handle of the visual element.
    pub id: T,
    /// `true` when the element was created by this call.
    pub created: bool,
}

#[derive(Debug, Default)]
struct Inner {
    nodes_by_kam: HashMap<String, VisualNodeId>,
    edges_by_kam: HashMap<String, VisualEdgeId>,
    kam_by_node: HashMap<VisualNodeId, KamNode>,
    kam_by_edge: HashMap<VisualEdgeId, KamEdge>,
}

/// Bidirectional map between KAM identifiers and visual handles.
///
/// One instance exists per visual graph and lives exactly as long as it.
/// Resolve-or-create is an atomic check-then-insert per key, so racing
/// expansions cannot create duplicate visual elements for one KAM id.
#[derive(Debug, Default)]
pub struct IdentityMap {
    inner: Mutex<Inner>,
}

impl IdentityMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visual node mapped to this KAM node, creating it if
    /// absent. Idempotent: repeated calls with the same KAM id return the
    /// identical handle.
    pub fn resolve_or_create_node(
        &self,
        host: &mut dyn GraphHost,
        node: &KamNode,
    ) -> Resolved<VisualNodeId> {
        let mut inner = self.lock();
        if let Some(&id) = inner.nodes_by_kam.get(&node.id) {
            return Resolved { id, created: false };
        }

        let id = host.add_node(&NodeAttributes::from(node));
        inner.nodes_by_kam.insert(node.id.clone(), id);
        inner.kam_by_node.insert(id, node.clone());
        log::debug!("Created visual node {id:?} for KAM node {}", node.id);
        Resolved { id, created: true }
    }

    /// Returns the visual edge mapped to this KAM edge, creating it between
    /// the given endpoints if absent. Same idempotence contract as
    /// [`resolve_or_create_node`](Self::resolve_or_create_node), keyed by
    /// the KAM edge id.
    pub fn resolve_or_create_edge(
        &self,
        host: &mut dyn GraphHost,
        edge: &KamEdge,
        source: VisualNodeId,
        target: VisualNodeId,
    ) -> Resolved<VisualEdgeId> {
        let mut inner = self.lock();
        if let Some(&id) = inner.edges_by_kam.get(&edge.id) {
            return Resolved { id, created: false };
        }

        let id = host.add_edge(source, target, &EdgeAttributes::from(edge));
        inner.edges_by_kam.insert(edge.id.clone(), id);
        inner.kam_by_edge.insert(id, edge.clone());
        log::debug!("Created visual edge {id:?} for KAM edge {}", edge.id);
        Resolved { id, created: true }
    }

    /// The KAM node behind a visual node, if the identity is known.
    pub fn kam_node(&self, id: VisualNodeId) -> Option<KamNode> {
        self.lock().kam_by_node.get(&id).cloned()
    }

    /// The KAM edge behind a visual edge, if the identity is known.
    pub fn kam_edge(&self, id: VisualEdgeId) -> Option<KamEdge> {
        self.lock().kam_by_edge.get(&id).cloned()
    }

    /// Number of mapped nodes.
    pub fn node_count(&self) -> usize {
        self.lock().nodes_by_kam.len()
    }

    /// Number of mapped edges.
    pub fn edge_count(&self) -> usize {
        self.lock().edges_by_kam.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryGraphHost;

    fn node(id: &str) -> KamNode {
        KamNode::new(id, "proteinAbundance", format!("p({id})"))
    }

    fn edge(id: &str, source: &str, target: &str) -> KamEdge {
        KamEdge::new(id, node(source), node(target), "increases")
    }

    #[test]
    fn test_resolve_node_twice_returns_identical_handle() {
        let map = IdentityMap::new();
        let mut host = MemoryGraphHost::new();

        let first = map.resolve_or_create_node(&mut host, &node("a"));
        let second = map.resolve_or_create_node(&mut host, &node("a"));

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.id, second.id);
        assert_eq!(host.node_count(), 1);
        assert_eq!(map.node_count(), 1);
    }

    #[test]
    fn test_resolve_edge_idempotent() {
        let map = IdentityMap::new();
        let mut host = MemoryGraphHost::new();

        let a = map.resolve_or_create_node(&mut host, &node("a")).id;
        let b = map.resolve_or_create_node(&mut host, &node("b")).id;

        let e = edge("e1", "a", "b");
        let first = map.resolve_or_create_edge(&mut host, &e, a, b);
        let second = map.resolve_or_create_edge(&mut host, &e, a, b);

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.id, second.id);
        assert_eq!(host.edge_count(), 1);
    }

    #[test]
    fn test_reverse_lookups() {
        let map = IdentityMap::new();
        let mut host = MemoryGraphHost::new();

        let kam_node = node("a");
        let visual = map.resolve_or_create_node(&mut host, &kam_node).id;

        assert_eq!(map.kam_node(visual), Some(kam_node));
        assert_eq!(map.kam_edge(VisualEdgeId(99)), None);
    }

    #[test]
    fn test_unmapped_lookup_is_none_not_panic() {
        let map = IdentityMap::new();
        assert!(map.kam_node(VisualNodeId(0)).is_none());
        assert!(map.kam_edge(VisualEdgeId(0)).is_none());
    }

    #[test]
    fn test_distinct_kam_ids_get_distinct_nodes() {
        let map = IdentityMap::new();
        let mut host = MemoryGraphHost::new();

        let a = map.resolve_or_create_node(&mut host, &node("a")).id;
        let b = map.resolve_or_create_node(&mut host, &node("b")).id;

        assert_ne!(a, b);
        assert_eq!(host.node_count(), 2);
    }
}
