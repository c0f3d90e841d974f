//! # kamnav-client
//!
//! Client library for the remote KAM (Knowledge Assembly Model) web service.
//!
//! This crate provides:
//! - The wire model: KAM nodes/edges and BEL evidence types
//! - The [`KamService`] trait consumed by the navigation core
//! - [`HttpKamService`], the reqwest-backed implementation
//! - [`ClientConnector`] for applying configuration and probing reachability

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod connector;
pub mod error;
pub mod http;
pub mod model;
pub mod service;

pub use connector::{ClientConnector, ConnectionStatus};
pub use error::{Error, Result};
pub use http::HttpKamService;
pub use model::{Annotation, BelStatement, BelTerm, Citation, EdgeDirection, KamEdge, KamNode};
pub use service::KamService;
