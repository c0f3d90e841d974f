//! Per-graph navigation session.
//!
//! [`KamSession`] is the context object threaded through the expansion task
//! and the details presenter: the remote service handle plus the identity
//! map of one visual graph. It is constructed when a visual graph is first
//! populated from a KAM and dropped when that graph is closed.

use std::fmt;
use std::sync::Arc;

use kamnav_client::KamService;

use crate::identity::IdentityMap;

/// Context for navigating one KAM through one visual graph.
pub struct KamSession {
    kam_name: String,
    service: Arc<dyn KamService>,
    identity: IdentityMap,
}

impl KamSession {
    /// Creates a session for the named KAM backed by the given service.
    pub fn new(kam_name: impl Into<String>, service: Arc<dyn KamService>) -> Self {
        Self {
            kam_name: kam_name.into(),
            service,
            identity: IdentityMap::new(),
        }
    }

    /// Name of the KAM this session navigates.
    pub fn kam_name(&self) -> &str {
        &self.kam_name
    }

    /// The remote service handle.
    pub fn service(&self) -> &Arc<dyn KamService> {
        &self.service
    }

    /// The identity map of this session's visual graph.
    pub fn identity(&self) -> &IdentityMap {
        &self.identity
    }
}

impl fmt::Debug for KamSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KamSession")
            .field("kam_name", &self.kam_name)
            .field("nodes", &self.identity.node_count())
            .field("edges", &self.identity.edge_count())
            .finish()
    }
}
