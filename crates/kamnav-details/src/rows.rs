//! Display rows for KAM evidence.
//!
//! Pure mappings from wire types to ordered display rows. Whatever UI layer
//! the host provides renders these; nothing here touches a toolkit. Column
//! shapes follow the classic navigator panels: one term column, a
//! subject/relationship/object statement table, a single-citation table and
//! a name/value annotation table.

use kamnav_client::{Annotation, BelStatement, BelTerm, Citation};

// ============================================================================
// Row types
// ============================================================================

/// A supporting BEL term row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermRow {
    /// BEL term text.
    pub term: String,
}

/// A supporting BEL statement row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatementRow {
    /// Subject term label.
    pub subject: String,
    /// Relationship tag; definitional statements have none.
    pub relationship: Option<String>,
    /// Rendered object column; absent for definitional statements and for
    /// nested objects missing any part.
    pub object: Option<String>,
}

/// A citation row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CitationRow {
    /// Source reference, rendered as `"{type} - {id}"`.
    pub reference: String,
    /// Title of the cited work.
    pub name: Option<String>,
    /// Publication date in RFC 3339 form, when known.
    pub publication_date: Option<String>,
    /// Author list joined with `", "`.
    pub authors: String,
}

/// An annotation row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationRow {
    /// Annotation type name.
    pub name: String,
    /// Annotation value, when the service supplied one.
    pub value: Option<String>,
}

// ============================================================================
// Mappings
// ============================================================================

/// Maps a BEL term to its display row.
pub fn term_row(term: &BelTerm) -> TermRow {
    TermRow {
        term: term.label.clone(),
    }
}

/// Maps a BEL statement to its display row.
///
/// The object column shows the object term label when present. A nested
/// object statement renders as `"subject relationship object"`, but only
/// when all three parts exist; a partial nested statement renders as an
/// absent object.
pub fn statement_row(statement: &BelStatement) -> StatementRow {
    let object = match (&statement.object_term, &statement.object_statement) {
        (Some(term), _) => Some(term.label.clone()),
        (None, Some(nested)) => render_nested(nested),
        (None, None) => None,
    };

    StatementRow {
        subject: statement.subject.label.clone(),
        relationship: statement.relationship.clone(),
        object,
    }
}

fn render_nested(nested: &BelStatement) -> Option<String> {
    let relationship = nested.relationship.as_ref()?;
    let object = nested.object_term.as_ref()?;
    Some(format!(
        "{} {} {}",
        nested.subject.label, relationship, object.label
    ))
}

/// Maps a citation to its display row.
pub fn citation_row(citation: &Citation) -> CitationRow {
    CitationRow {
        reference: format!("{} - {}", citation.citation_type, citation.id),
        name: citation.name.clone(),
        publication_date: citation.publication_date.map(|d| d.to_rfc3339()),
        authors: citation.authors.join(", "),
    }
}

/// Maps an annotation to its display row.
pub fn annotation_row(annotation: &Annotation) -> AnnotationRow {
    AnnotationRow {
        name: annotation.name.clone(),
        value: annotation.value.clone(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_row() {
        let row = term_row(&BelTerm::new("p(HGNC:AKT1)"));
        assert_eq!(row.term, "p(HGNC:AKT1)");
    }

    #[test]
    fn test_statement_row_with_object_term() {
        let stmt = BelStatement::new(BelTerm::new("p(HGNC:AKT1)"))
            .with_object_term("increases", BelTerm::new("p(HGNC:TP53)"));
        let row = statement_row(&stmt);

        assert_eq!(row.subject, "p(HGNC:AKT1)");
        assert_eq!(row.relationship.as_deref(), Some("increases"));
        assert_eq!(row.object.as_deref(), Some("p(HGNC:TP53)"));
    }

    #[test]
    fn test_statement_row_definitional() {
        let row = statement_row(&BelStatement::new(BelTerm::new("p(HGNC:AKT1)")));
        assert!(row.relationship.is_none());
        assert!(row.object.is_none());
    }

    #[test]
    fn test_statement_row_nested_object() {
        let inner = BelStatement::new(BelTerm::new("p(HGNC:MAPK1)"))
            .with_object_term("increases", BelTerm::new("bp(GO:apoptosis)"));
        let outer = BelStatement::new(BelTerm::new("p(HGNC:AKT1)"))
            .with_object_statement("decreases", inner);

        let row = statement_row(&outer);
        assert_eq!(
            row.object.as_deref(),
            Some("p(HGNC:MAPK1) increases bp(GO:apoptosis)")
        );
    }

    #[test]
    fn test_statement_row_incomplete_nested_object() {
        // Nested statement missing its object term renders as no object.
        let inner = BelStatement::new(BelTerm::new("p(HGNC:MAPK1)"));
        let outer = BelStatement::new(BelTerm::new("p(HGNC:AKT1)"))
            .with_object_statement("decreases", inner);

        let row = statement_row(&outer);
        assert!(row.object.is_none());
    }

    #[test]
    fn test_citation_row() {
        use chrono::TimeZone;
        let date = chrono::Utc.with_ymd_and_hms(2011, 3, 15, 0, 0, 0).unwrap();
        let citation = Citation::new("PubMed", "10022128")
            .with_name("AKT1 signalling in cancer")
            .with_publication_date(date)
            .with_author("Smith J")
            .with_author("Jones K");

        let row = citation_row(&citation);
        assert_eq!(row.reference, "PubMed - 10022128");
        assert_eq!(row.name.as_deref(), Some("AKT1 signalling in cancer"));
        assert_eq!(row.publication_date.as_deref(), Some("2011-03-15T00:00:00+00:00"));
        assert_eq!(row.authors, "Smith J, Jones K");
    }

    #[test]
    fn test_citation_row_minimal() {
        let row = citation_row(&Citation::new("PubMed", "1"));
        assert_eq!(row.reference, "PubMed - 1");
        assert!(row.name.is_none());
        assert!(row.publication_date.is_none());
        assert_eq!(row.authors, "");
    }

    #[test]
    fn test_annotation_row() {
        let row = annotation_row(&Annotation::new("Species", "9606"));
        assert_eq!(row.name, "Species");
        assert_eq!(row.value.as_deref(), Some("9606"));
    }
}
