//! Wire model for the remote KAM service.
//!
//! These types are read-only snapshots of what the service returns: KAM
//! nodes and edges for graph expansion, and the BEL evidence (terms,
//! statements, citations, annotations) behind them. The source of truth
//! stays on the server; nothing here is mutated after deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// EdgeDirection
// ============================================================================

/// Traversal orientation for adjacent-edge queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDirection {
    /// Edges leaving the node (downstream).
    Forward,
    /// Edges entering the node (upstream).
    Reverse,
    /// Both orientations.
    #[default]
    Both,
}

impl EdgeDirection {
    /// Wire name used in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
            Self::Both => "both",
        }
    }

    /// Human-readable label for status reporting.
    pub fn status_label(&self) -> &'static str {
        match self {
            Self::Forward => "downstream",
            Self::Reverse => "upstream",
            Self::Both => "downstream and upstream",
        }
    }
}

// ============================================================================
// KamNode / KamEdge
// ============================================================================

/// A node of the remote Knowledge Assembly Model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KamNode {
    /// Service-assigned identifier.
    pub id: String,
    /// BEL function tag (e.g. "proteinAbundance").
    pub function: String,
    /// Display label (the BEL term text).
    pub label: String,
}

impl KamNode {
    /// Creates a node snapshot.
    pub fn new(
        id: impl Into<String>,
        function: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            function: function.into(),
            label: label.into(),
        }
    }
}

/// A directed edge of the remote Knowledge Assembly Model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KamEdge {
    /// Service-assigned identifier.
    pub id: String,
    /// Source endpoint.
    pub source: KamNode,
    /// Target endpoint.
    pub target: KamNode,
    /// BEL relationship tag (e.g. "increases").
    pub relationship: String,
}

impl KamEdge {
    /// Creates an edge snapshot.
    pub fn new(
        id: impl Into<String>,
        source: KamNode,
        target: KamNode,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source,
            target,
            relationship: relationship.into(),
        }
    }
}

// ============================================================================
// BEL evidence types
// ============================================================================

/// A BEL term supporting a KAM node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BelTerm {
    /// BEL term text.
    pub label: String,
}

impl BelTerm {
    /// Creates a term with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// A citation backing a BEL statement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Identifier within the citation source (e.g. a PubMed id).
    pub id: String,
    /// Citation source type (e.g. "PubMed").
    pub citation_type: String,
    /// Title or name of the cited work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Publication date, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<DateTime<Utc>>,
    /// Author list.
    #[serde(default)]
    pub authors: Vec<String>,
}

impl Citation {
    /// Creates a citation with the given type and id.
    pub fn new(citation_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            citation_type: citation_type.into(),
            name: None,
            publication_date: None,
            authors: Vec::new(),
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the publication date.
    pub fn with_publication_date(mut self, date: DateTime<Utc>) -> Self {
        self.publication_date = Some(date);
        self
    }

    /// Adds an author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }
}

/// An annotation attached to a BEL statement (e.g. species, tissue).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Annotation type name.
    pub name: String,
    /// Annotation value; the service may omit it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Annotation {
    /// Creates an annotation.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// A BEL statement supporting a KAM edge.
///
/// The object position holds either a term or a nested statement; simple
/// definitional statements carry neither relationship nor object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BelStatement {
    /// Subject term.
    pub subject: BelTerm,
    /// Relationship tag; absent for definitional statements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    /// Object term, for term-object statements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_term: Option<BelTerm>,
    /// Object statement, for nested-statement objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_statement: Option<Box<BelStatement>>,
    /// Citation backing this statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<Citation>,
    /// Annotations scoped to this statement.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl BelStatement {
    /// Creates a definitional statement with only a subject.
    pub fn new(subject: BelTerm) -> Self {
        Self {
            subject,
            relationship: None,
            object_term: None,
            object_statement: None,
            citation: None,
            annotations: Vec::new(),
        }
    }

    /// Sets the relationship and object term.
    pub fn with_object_term(mut self, relationship: impl Into<String>, object: BelTerm) -> Self {
        self.relationship = Some(relationship.into());
        self.object_term = Some(object);
        self
    }

    /// Sets the relationship and a nested object statement.
    pub fn with_object_statement(
        mut self,
        relationship: impl Into<String>,
        object: BelStatement,
    ) -> Self {
        self.relationship = Some(relationship.into());
        self.object_statement = Some(Box::new(object));
        self
    }

    /// Sets the citation.
    pub fn with_citation(mut self, citation: Citation) -> Self {
        self.citation = Some(citation);
        self
    }

    /// Adds an annotation.
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
