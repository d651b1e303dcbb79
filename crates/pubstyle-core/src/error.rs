// File: crates/pubstyle-core/src/error.rs
// Summary: Layout errors raised for unrecognized alignment or position requests.

use thiserror::Error;

/// Configuration mistakes surfaced by the label layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("unrecognized text alignment: {0}")]
    UnrecognizedAlignment(String),
    #[error("unrecognized label position: {0}")]
    UnrecognizedPosition(String),
}
