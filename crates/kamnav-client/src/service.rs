//! The remote KAM service trait.
//!
//! [`KamService`] is the seam between the navigation core and the remote
//! web service. The HTTP implementation lives in [`crate::http`]; tests
//! substitute in-memory stubs.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{BelStatement, BelTerm, EdgeDirection, KamEdge};

/// Operations consumed from the remote KAM web service.
///
/// All operations return ordered sequences; ordering is the service's and is
/// preserved as received. Transport and service failures surface as
/// [`crate::Error`], never as silently empty results.
#[async_trait]
pub trait KamService: Send + Sync {
    /// Fetch the BEL terms supporting a KAM node.
    ///
    /// Returns an empty sequence when the node has no supporting terms.
    async fn supporting_terms(&self, node_id: &str) -> Result<Vec<BelTerm>>;

    /// Fetch the BEL statements supporting a KAM edge.
    ///
    /// Returns an empty sequence when the edge has no supporting evidence.
    async fn supporting_statements(&self, edge_id: &str) -> Result<Vec<BelStatement>>;

    /// Fetch the edges adjacent to a KAM node in the given direction.
    ///
    /// `limit` caps the number of returned edges; `None` is unbounded.
    async fn adjacent_edges(
        &self,
        node_id: &str,
        direction: EdgeDirection,
        limit: Option<usize>,
    ) -> Result<Vec<KamEdge>>;
}
