//! Details presentation for selected visual elements.
//!
//! [`DetailsPresenter`] resolves a selected visual node or edge back to its
//! KAM counterpart, fetches the supporting evidence and fills the read
//! models in [`crate::rows`]. Edge details carry a small state machine:
//!
//! ```text
//! Empty -> Listing(statements) -> Listing + Detail(selected statement)
//! ```
//!
//! Selecting an edge loads a fresh listing and clears any prior detail;
//! selecting a statement row populates the citation and annotation views
//! from that statement. There is never detail state for more than one
//! statement at a time.

use kamnav_client::BelStatement;
use kamnav_graph::{KamSession, VisualEdgeId, VisualNodeId};

use crate::error::Result;
use crate::rows::{
    AnnotationRow, CitationRow, StatementRow, TermRow, annotation_row, citation_row,
    statement_row, term_row,
};

// ============================================================================
// EdgeDetailsView
// ============================================================================

/// Observable state of an [`EdgeDetailsView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailState {
    /// No edge loaded.
    Empty,
    /// Statements listed, no statement selected.
    Listing,
    /// Statements listed and one statement's detail shown.
    Detail,
}

/// Read model for the edge-details panel.
#[derive(Debug, Default)]
pub struct EdgeDetailsView {
    statements: Vec<BelStatement>,
    selected: Option<usize>,
}

impl EdgeDetailsView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the view.
    pub fn state(&self) -> DetailState {
        match (self.statements.is_empty(), self.selected) {
            (true, _) => DetailState::Empty,
            (false, None) => DetailState::Listing,
            (false, Some(_)) => DetailState::Detail,
        }
    }

    /// Number of listed statements.
    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }

    /// Statement rows in service order.
    pub fn statement_rows(&self) -> Vec<StatementRow> {
        self.statements.iter().map(statement_row).collect()
    }

    /// Citation rows for the selected statement; at most one row, empty
    /// until a statement is selected.
    pub fn citation_rows(&self) -> Vec<CitationRow> {
        self.selected_statement()
            .and_then(|s| s.citation.as_ref())
            .map(citation_row)
            .into_iter()
            .collect()
    }

    /// Annotation rows scoped to the selected statement; empty until a
    /// statement is selected.
    pub fn annotation_rows(&self) -> Vec<AnnotationRow> {
        self.selected_statement()
            .map(|s| s.annotations.iter().map(annotation_row).collect())
            .unwrap_or_default()
    }

    /// Select a statement row, replacing any prior detail.
    ///
    /// Returns `false` and leaves the view unchanged when the index is out
    /// of range.
    pub fn select_statement(&mut self, index: usize) -> bool {
        if index >= self.statements.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Reset to the empty state.
    pub fn clear(&mut self) {
        self.statements.clear();
        self.selected = None;
    }

    fn selected_statement(&self) -> Option<&BelStatement> {
        self.selected.and_then(|i| self.statements.get(i))
    }

    fn load(&mut self, statements: Vec<BelStatement>) {
        self.statements = statements;
        // New listing, so the citation and annotation views reset.
        self.selected = None;
    }
}

// ============================================================================
// DetailsPresenter
// ============================================================================

/// Fetches and presents supporting evidence for visual elements.
pub struct DetailsPresenter<'a> {
    session: &'a KamSession,
}

impl<'a> DetailsPresenter<'a> {
    /// Creates a presenter over the given session.
    pub fn new(session: &'a KamSession) -> Self {
        Self { session }
    }

    /// Supporting BEL terms for a visual node, in service order.
    ///
    /// A node with no KAM counterpart yields an empty sequence, not an
    /// error.
    pub async fn describe_node(&self, node: VisualNodeId) -> Result<Vec<TermRow>> {
        let Some(kam_node) = self.session.identity().kam_node(node) else {
            log::warn!("Visual node {node:?} has no KAM counterpart, nothing to describe");
            return Ok(Vec::new());
        };

        let terms = self.session.service().supporting_terms(&kam_node.id).await?;
        Ok(terms.iter().map(term_row).collect())
    }

    /// Load the supporting statements of a visual edge into the view.
    ///
    /// An edge with no KAM counterpart clears the view and succeeds. A
    /// service failure propagates and leaves the view untouched.
    pub async fn describe_edge(
        &self,
        view: &mut EdgeDetailsView,
        edge: VisualEdgeId,
    ) -> Result<()> {
        let Some(kam_edge) = self.session.identity().kam_edge(edge) else {
            log::warn!("Visual edge {edge:?} has no KAM counterpart, nothing to describe");
            view.clear();
            return Ok(());
        };

        let statements = self
            .session
            .service()
            .supporting_statements(&kam_edge.id)
            .await?;
        view.load(statements);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use kamnav_client::{
        Annotation, BelTerm, Citation, EdgeDirection, KamEdge, KamNode, KamService,
    };
    use kamnav_graph::MemoryGraphHost;
    use std::collections::HashMap;
    use std::sync::Arc;

    struct StubService {
        terms: HashMap<String, Vec<BelTerm>>,
        statements: HashMap<String, Vec<BelStatement>>,
    }

    #[async_trait]
    impl KamService for StubService {
        async fn supporting_terms(&self, node_id: &str) -> kamnav_client::Result<Vec<BelTerm>> {
            Ok(self.terms.get(node_id).cloned().unwrap_or_default())
        }

        async fn supporting_statements(
            &self,
            edge_id: &str,
        ) -> kamnav_client::Result<Vec<BelStatement>> {
            Ok(self.statements.get(edge_id).cloned().unwrap_or_default())
        }

        async fn adjacent_edges(
            &self,
            _node_id: &str,
            _direction: EdgeDirection,
            _limit: Option<usize>,
        ) -> kamnav_client::Result<Vec<KamEdge>> {
            Ok(Vec::new())
        }
    }

    fn node(id: &str) -> KamNode {
        KamNode::new(id, "proteinAbundance", format!("p({id})"))
    }

    fn statement(subject: &str, citation_id: &str, annotation: &str) -> BelStatement {
        BelStatement::new(BelTerm::new(subject))
            .with_object_term("increases", BelTerm::new("p(HGNC:TP53)"))
            .with_citation(Citation::new("PubMed", citation_id))
            .with_annotation(Annotation::new("Species", annotation))
    }

    fn fixture() -> (KamSession, MemoryGraphHost, VisualNodeId, VisualEdgeId) {
        let service = StubService {
            terms: HashMap::from([(
                "a".to_string(),
                vec![BelTerm::new("p(HGNC:AKT1)"), BelTerm::new("p(MGI:Akt1)")],
            )]),
            statements: HashMap::from([(
                "e1".to_string(),
                vec![
                    statement("p(HGNC:AKT1)", "1001", "9606"),
                    statement("p(MGI:Akt1)", "2002", "10090"),
                ],
            )]),
        };
        let session = KamSession::new("small-corpus", Arc::new(service));
        let mut host = MemoryGraphHost::new();

        let identity = session.identity();
        let a = identity.resolve_or_create_node(&mut host, &node("a")).id;
        let b = identity.resolve_or_create_node(&mut host, &node("b")).id;
        let e = identity
            .resolve_or_create_edge(
                &mut host,
                &KamEdge::new("e1", node("a"), node("b"), "increases"),
                a,
                b,
            )
            .id;
        (session, host, a, e)
    }

    #[tokio::test]
    async fn test_describe_node_returns_term_rows() {
        let (session, _host, a, _e) = fixture();
        let presenter = DetailsPresenter::new(&session);

        let rows = presenter.describe_node(a).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].term, "p(HGNC:AKT1)");
    }

    #[tokio::test]
    async fn test_describe_unmapped_node_is_empty() {
        let (session, _host, _a, _e) = fixture();
        let presenter = DetailsPresenter::new(&session);

        let rows = presenter.describe_node(VisualNodeId(999)).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_edge_details_state_machine() {
        let (session, _host, _a, e) = fixture();
        let presenter = DetailsPresenter::new(&session);
        let mut view = EdgeDetailsView::new();

        assert_eq!(view.state(), DetailState::Empty);

        presenter.describe_edge(&mut view, e).await.unwrap();
        assert_eq!(view.state(), DetailState::Listing);
        assert_eq!(view.statement_count(), 2);
        assert!(view.citation_rows().is_empty());
        assert!(view.annotation_rows().is_empty());

        assert!(view.select_statement(0));
        assert_eq!(view.state(), DetailState::Detail);
        assert_eq!(view.citation_rows()[0].reference, "PubMed - 1001");
        assert_eq!(view.annotation_rows()[0].value.as_deref(), Some("9606"));
    }

    #[tokio::test]
    async fn test_selecting_other_statement_replaces_detail() {
        let (session, _host, _a, e) = fixture();
        let presenter = DetailsPresenter::new(&session);
        let mut view = EdgeDetailsView::new();

        presenter.describe_edge(&mut view, e).await.unwrap();
        view.select_statement(0);
        view.select_statement(1);

        // Detail shows the second statement only; nothing stale remains.
        assert_eq!(view.citation_rows().len(), 1);
        assert_eq!(view.citation_rows()[0].reference, "PubMed - 2002");
        assert_eq!(view.annotation_rows()[0].value.as_deref(), Some("10090"));
    }

    #[tokio::test]
    async fn test_reloading_edge_clears_detail() {
        let (session, _host, _a, e) = fixture();
        let presenter = DetailsPresenter::new(&session);
        let mut view = EdgeDetailsView::new();

        presenter.describe_edge(&mut view, e).await.unwrap();
        view.select_statement(1);

        presenter.describe_edge(&mut view, e).await.unwrap();
        assert_eq!(view.state(), DetailState::Listing);
        assert!(view.citation_rows().is_empty());
        assert!(view.annotation_rows().is_empty());
    }

    #[tokio::test]
    async fn test_describe_unmapped_edge_empties_view() {
        let (session, _host, _a, e) = fixture();
        let presenter = DetailsPresenter::new(&session);
        let mut view = EdgeDetailsView::new();

        presenter.describe_edge(&mut view, e).await.unwrap();
        view.select_statement(0);

        presenter
            .describe_edge(&mut view, VisualEdgeId(999))
            .await
            .unwrap();
        assert_eq!(view.state(), DetailState::Empty);
        assert!(view.statement_rows().is_empty());
    }

    #[test]
    fn test_select_out_of_range_is_rejected() {
        let mut view = EdgeDetailsView::new();
        assert!(!view.select_statement(0));
        assert_eq!(view.state(), DetailState::Empty);
    }
}
