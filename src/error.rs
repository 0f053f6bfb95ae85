//! Error types returned by the fallible entry points of this crate.
//!
//! The teacher (`kiddo`) has no error type of its own — out-of-range queries there
//! simply return empty results. This crate's surface is similarly small, so rather
//! than inventing a convention, `thiserror` is adopted the way the sibling spatial-index
//! crate `geo-index` uses it for its own small error enum.

use thiserror::Error;

/// Errors that can occur while building or querying a tree.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum TreeError {
    /// A query was issued against an empty point array.
    #[error("cannot query an empty tree")]
    EmptyTree,
}
