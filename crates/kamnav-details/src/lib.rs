//! # kamnav-details
//!
//! Evidence presentation for KAM navigation.
//!
//! This crate provides:
//! - Display row types and pure row mappings ([`rows`])
//! - [`DetailsPresenter`]: fetches supporting terms/statements for a
//!   selected visual node or edge
//! - [`EdgeDetailsView`]: the edge-details state machine
//!   (`Empty -> Listing -> Listing + Detail`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod presenter;
pub mod rows;

pub use error::{Error, Result};
pub use presenter::{DetailState, DetailsPresenter, EdgeDetailsView};
pub use rows::{AnnotationRow, CitationRow, StatementRow, TermRow};
