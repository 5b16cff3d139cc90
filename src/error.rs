//! Crate wide error type.

use thiserror::Error;

/// Errors produced while building or styling the graph.
///
/// Interaction handlers never let these escape the overlay. Style updates on
/// unknown ids and unparsable colors degrade to logged no-ops or documented
/// fallbacks instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A color string was not of the form `#rrggbb`.
    #[error("invalid hex color {0:?}")]
    InvalidColor(String),
}
