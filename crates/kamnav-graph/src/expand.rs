//! Incremental graph expansion.
//!
//! [`ExpansionTask`] fetches the edges adjacent to a set of already-placed
//! visual nodes, merges them into the host graph through the identity map,
//! then selects the newly added nodes and re-lays out only that selection.
//!
//! The task is cooperative: a [`HaltFlag`] is checked between input nodes,
//! and a halt keeps everything merged so far (success-so-far, no rollback).
//! Expansion is idempotent; re-running the same expansion creates nothing
//! new and only refreshes the selection.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use kamnav_client::EdgeDirection;

use crate::error::{Error, Result};
use crate::host::{GraphHost, VisualNodeId};
use crate::session::KamSession;

/// Layout run over newly added nodes after an expansion.
pub const EXPANSION_LAYOUT: &str = "degree-circle";

// ============================================================================
// HaltFlag
// ============================================================================

/// Cloneable cooperative cancellation flag.
///
/// The host raises it from the interactive surface; the task observes it
/// between input nodes.
#[derive(Clone, Debug, Default)]
pub struct HaltFlag(Arc<AtomicBool>);

impl HaltFlag {
    /// Creates a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag.
    pub fn halt(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether the flag has been raised.
    pub fn is_halted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ============================================================================
// ExpansionReport
// ============================================================================

/// Summary of one expansion run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionReport {
    /// Input nodes whose adjacency was fetched and merged.
    pub inputs_processed: usize,
    /// Input nodes skipped because they have no KAM counterpart.
    pub inputs_skipped: usize,
    /// Visual nodes created by this run.
    pub nodes_created: usize,
    /// Visual edges created by this run.
    pub edges_created: usize,
    /// Handles of the nodes created by this run, in merge order.
    pub new_nodes: Vec<VisualNodeId>,
    /// Whether the task stopped early on the halt flag.
    pub halted: bool,
}

// ============================================================================
// ExpansionTask
// ============================================================================

/// Expands the visual graph around a set of input nodes.
pub struct ExpansionTask<'a> {
    session: &'a KamSession,
    direction: EdgeDirection,
    limit: Option<usize>,
    halt: HaltFlag,
}

impl<'a> ExpansionTask<'a> {
    /// Creates a task expanding in the given direction, unbounded.
    pub fn new(session: &'a KamSession, direction: EdgeDirection) -> Self {
        Self {
            session,
            direction,
            limit: None,
            halt: HaltFlag::new(),
        }
    }

    /// Caps the number of adjacent edges requested per input node.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Uses an externally held halt flag.
    pub fn with_halt_flag(mut self, halt: HaltFlag) -> Self {
        self.halt = halt;
        self
    }

    /// A clone of the task's halt flag.
    pub fn halt_flag(&self) -> HaltFlag {
        self.halt.clone()
    }

    /// Run the expansion against the host graph.
    ///
    /// Input nodes with no KAM counterpart are skipped, not failed. A
    /// service error aborts the task but leaves everything already merged
    /// in place. After the merge loop the selection is replaced with the
    /// newly added nodes and the expansion layout runs over that selection
    /// only, leaving previously placed nodes undisturbed.
    pub async fn run(
        &self,
        host: &mut dyn GraphHost,
        inputs: &[VisualNodeId],
    ) -> Result<ExpansionReport> {
        if inputs.is_empty() {
            return Err(Error::EmptyInput);
        }

        log::info!(
            "Expanding {} edges for {} selected nodes",
            self.direction.status_label(),
            inputs.len()
        );

        let identity = self.session.identity();
        let mut report = ExpansionReport::default();
        let mut new_nodes: Vec<VisualNodeId> = Vec::new();

        for &input in inputs {
            if self.halt.is_halted() {
                report.halted = true;
                break;
            }

            let Some(kam_node) = identity.kam_node(input) else {
                log::warn!("Visual node {input:?} has no KAM counterpart, skipping");
                report.inputs_skipped += 1;
                continue;
            };

            let edges = self
                .session
                .service()
                .adjacent_edges(&kam_node.id, self.direction, self.limit)
                .await?;
            log::debug!(
                "Merging {} adjacent edges for KAM node {}",
                edges.len(),
                kam_node.id
            );

            for edge in &edges {
                let source = identity.resolve_or_create_node(host, &edge.source);
                if source.created {
                    new_nodes.push(source.id);
                    report.nodes_created += 1;
                }

                let target = identity.resolve_or_create_node(host, &edge.target);
                if target.created {
                    new_nodes.push(target.id);
                    report.nodes_created += 1;
                }

                let visual_edge =
                    identity.resolve_or_create_edge(host, edge, source.id, target.id);
                if visual_edge.created {
                    report.edges_created += 1;
                }
            }

            report.inputs_processed += 1;
        }

        host.clear_selection();
        host.select_nodes(&new_nodes);
        if !new_nodes.is_empty() {
            host.apply_layout(EXPANSION_LAYOUT, true);
        }
        host.redraw();

        report.new_nodes = new_nodes;
        Ok(report)
    }
}

// ============================================================================
// Tests
// ============================================================================
