//! Catalog crate for browsing and recommending movies.
//!
//! This crate wraps a movie catalog in an async query service. The
//! computations finish immediately; the async surface matches a future
//! remote data source.

pub mod source;
pub mod service;

pub use source::{CatalogSource, InMemoryCatalog};
pub use service::CatalogService;
