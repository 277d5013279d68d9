use thiserror::Error;

/// Errors that can occur when building a filter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("cannot include as well as exclude {kind}, specify one or the other")]
    Conflicting { kind: String },
}
