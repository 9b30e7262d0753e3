//! Error types.
//!
//! Everything that can go wrong happens while a rule set is being loaded. Once
//! a [`RuleSet`](crate::RuleSet) exists it is known to be well formed, so
//! [`Responder::respond`](crate::Responder::respond) has no error path.

/// Errors produced while loading a rule set or building a conjugation table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source never closes a single block with a `.` line.
    #[error("rule file contains no closed keyword/reply block")]
    NoBlocks,

    /// Keywords or replies follow the last `.` line.
    #[error("line {line}: block is never closed (missing terminating '.')")]
    UnterminatedBlock { line: usize },

    /// A block closes with keywords but without a single reply.
    #[error("line {line}: block for keyword '{keyword}' has no replies")]
    EmptyReplies { line: usize, keyword: String },

    /// The fallback sentinel keyword never appears in the source.
    #[error("fallback keyword '{keyword}' is not defined")]
    MissingFallback { keyword: String },

    /// A conjugation subject is empty or only whitespace.
    #[error("conjugation pair {index}: subject '{subject}' has no matchable text")]
    InvalidConjugation { index: usize, subject: String },

    /// Reading the rule source failed.
    #[error("failed to read rule file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
