//! # kamnav-graph
//!
//! Identity mapping and incremental expansion for KAM navigation.
//!
//! This crate provides:
//! - [`GraphHost`]: the abstraction over the host application's graph view
//! - [`IdentityMap`]: bidirectional KAM id / visual handle mapping
//! - [`KamSession`]: the per-graph context object
//! - [`ExpansionTask`]: cancellable adjacent-edge fetch and merge

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod expand;
pub mod host;
pub mod identity;
pub mod session;

pub use error::{Error, Result};
pub use expand::{EXPANSION_LAYOUT, ExpansionReport, ExpansionTask, HaltFlag};
pub use host::{
    EdgeAttributes, GraphHost, LayoutRun, MemoryGraphHost, NodeAttributes, VisualEdgeId,
    VisualNodeId,
};
pub use identity::{IdentityMap, Resolved};
pub use session::KamSession;
