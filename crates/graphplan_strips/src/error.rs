//! Error types for problem construction and loading.

/// Errors raised while building or decoding a [`Problem`](crate::Problem).
#[derive(Debug, thiserror::Error)]
pub enum ProblemError {
    /// A literal string could not be parsed.
    #[error("invalid literal '{0}': expected 'Fluent' or '~Fluent'")]
    InvalidLiteral(String),

    /// A fluent name cannot be written as a literal string.
    #[error("invalid fluent name '{0}': names must be non-empty and trimmed and must not start with '~'")]
    InvalidFluent(String),

    /// Two actions share a name, or an action takes a no-op's name.
    #[error("duplicate action name: {0}")]
    DuplicateAction(String),

    /// The same fluent was declared twice in the state map.
    #[error("duplicate fluent: {0}")]
    DuplicateFluent(String),

    /// The initial state names a fluent that is not declared.
    #[error("unknown fluent in initial state: {0}")]
    UnknownFluent(String),

    /// The initial state vector does not line up with the fluent list.
    #[error("initial state has {actual} values but {expected} fluents are declared")]
    StateLengthMismatch {
        /// Number of declared fluents.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// JSON decoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the problem source failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
