//! Host graph-view abstraction.
//!
//! The navigation core never renders anything itself; it drives whatever
//! graph view the host application provides through [`GraphHost`]. The
//! trait covers exactly the operations the core consumes: create node,
//! create edge, manage the selection, run a named layout, redraw.
//!
//! [`MemoryGraphHost`] is a plain in-memory implementation used by tests
//! and by hosts that only need a model of the view.

use std::collections::BTreeSet;

use kamnav_client::{KamEdge, KamNode};

// ============================================================================
// Visual element handles
// ============================================================================

/// Opaque handle to a node in the host graph view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualNodeId(pub u64);

/// Opaque handle to an edge in the host graph view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VisualEdgeId(pub u64);

// ============================================================================
// Element attributes
// ============================================================================

/// Attributes stamped onto a visual node at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeAttributes {
    /// KAM node identifier the visual node mirrors.
    pub kam_id: String,
    /// BEL function tag.
    pub function: String,
    /// Display label.
    pub label: String,
}

impl From<&KamNode> for NodeAttributes {
    fn from(node: &KamNode) -> Self {
        Self {
            kam_id: node.id.clone(),
            function: node.function.clone(),
            label: node.label.clone(),
        }
    }
}

/// Attributes stamped onto a visual edge at creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeAttributes {
    /// KAM edge identifier the visual edge mirrors.
    pub kam_id: String,
    /// BEL relationship tag.
    pub relationship: String,
}

impl From<&KamEdge> for EdgeAttributes {
    fn from(edge: &KamEdge) -> Self {
        Self {
            kam_id: edge.id.clone(),
            relationship: edge.relationship.clone(),
        }
    }
}

// ============================================================================
// GraphHost trait
// ============================================================================

/// Operations the navigation core invokes on the host graph view.
///
/// The core only calls these; it implements none of them. A host adapter
/// wires them to the real view toolkit.
pub trait GraphHost {
    /// Create a node and return its handle.
    fn add_node(&mut self, attrs: &NodeAttributes) -> VisualNodeId;

    /// Create an edge between two existing nodes and return its handle.
    fn add_edge(
        &mut self,
        source: VisualNodeId,
        target: VisualNodeId,
        attrs: &EdgeAttributes,
    ) -> VisualEdgeId;

    /// Clear the node selection.
    fn clear_selection(&mut self);

    /// Add the given nodes to the selection.
    fn select_nodes(&mut self, nodes: &[VisualNodeId]);

    /// Run a named layout algorithm, optionally restricted to the selection.
    fn apply_layout(&mut self, name: &str, selected_only: bool);

    /// Redraw the view.
    fn redraw(&mut self);
}

// ============================================================================
// MemoryGraphHost
// ============================================================================

/// A layout invocation recorded by [`MemoryGraphHost`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutRun {
    /// Layout algorithm name.
    pub name: String,
    /// Whether the layout was restricted to the selection.
    pub selected_only: bool,
    /// Selection at the time the layout ran.
    pub selection: BTreeSet<VisualNodeId>,
}

/// In-memory [`GraphHost`] for tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemoryGraphHost {
    nodes: Vec<(VisualNodeId, NodeAttributes)>,
    edges: Vec<(VisualEdgeId, VisualNodeId, VisualNodeId, EdgeAttributes)>,
    selection: BTreeSet<VisualNodeId>,
    layouts: Vec<LayoutRun>,
    redraws: usize,
    next_id: u64,
}

impl MemoryGraphHost {
    /// Creates an empty host graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The current selection.
    pub fn selection(&self) -> &BTreeSet<VisualNodeId> {
        &self.selection
    }

    /// Layout invocations in order.
    pub fn layouts(&self) -> &[LayoutRun] {
        &self.layouts
    }

    /// Number of redraws requested.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    /// Attributes of a node, if it exists.
    pub fn node_attributes(&self, id: VisualNodeId) -> Option<&NodeAttributes> {
        self.nodes
            .iter()
            .find(|(node_id, _)| *node_id == id)
            .map(|(_, attrs)| attrs)
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl GraphHost for MemoryGraphHost {
    fn add_node(&mut self, attrs: &NodeAttributes) -> VisualNodeId {
        let id = VisualNodeId(self.next());
        self.nodes.push((id, attrs.clone()));
        id
    }

    fn add_edge(
        &mut self,
        source: VisualNodeId,
        target: VisualNodeId,
        attrs: &EdgeAttributes,
    ) -> VisualEdgeId {
        let id = VisualEdgeId(self.next());
        self.edges.push((id, source, target, attrs.clone()));
        id
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn select_nodes(&mut self, nodes: &[VisualNodeId]) {
        self.selection.extend(nodes.iter().copied());
    }

    fn apply_layout(&mut self, name: &str, selected_only: bool) {
        self.layouts.push(LayoutRun {
            name: name.to_string(),
            selected_only,
            selection: self.selection.clone(),
        });
    }

    fn redraw(&mut self) {
        self.redraws += 1;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(kam_id: &str) -> NodeAttributes {
        NodeAttributes {
            kam_id: kam_id.to_string(),
            function: "proteinAbundance".to_string(),
            label: format!("p({kam_id})"),
        }
    }

    #[test]
    fn test_add_node_issues_unique_handles() {
        let mut host = MemoryGraphHost::new();
        let a = host.add_node(&attrs("a"));
        let b = host.add_node(&attrs("b"));

        assert_ne!(a, b);
        assert_eq!(host.node_count(), 2);
        assert_eq!(host.node_attributes(a).unwrap().kam_id, "a");
    }

    #[test]
    fn test_selection_accumulates_until_cleared() {
        let mut host = MemoryGraphHost::new();
        let a = host.add_node(&attrs("a"));
        let b = host.add_node(&attrs("b"));

        host.select_nodes(&[a]);
        host.select_nodes(&[b]);
        assert_eq!(host.selection().len(), 2);

        host.clear_selection();
        assert!(host.selection().is_empty());
    }

    #[test]
    fn test_layout_records_selection_snapshot() {
        let mut host = MemoryGraphHost::new();
        let a = host.add_node(&attrs("a"));
        host.select_nodes(&[a]);
        host.apply_layout("degree-circle", true);
        host.clear_selection();

        let run = &host.layouts()[0];
        assert_eq!(run.name, "degree-circle");
        assert!(run.selected_only);
        assert!(run.selection.contains(&a));
    }

    #[test]
    fn test_attributes_from_kam_elements() {
        let node = kamnav_client::KamNode::new("n1", "proteinAbundance", "p(HGNC:AKT1)");
        let attrs = NodeAttributes::from(&node);
        assert_eq!(attrs.kam_id, "n1");
        assert_eq!(attrs.label, "p(HGNC:AKT1)");

        let edge = kamnav_client::KamEdge::new("e1", node.clone(), node, "increases");
        let attrs = EdgeAttributes::from(&edge);
        assert_eq!(attrs.kam_id, "e1");
        assert_eq!(attrs.relationship, "increases");
    }
}
