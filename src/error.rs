//! Error types for dataset loading

use thiserror::Error;

/// Errors raised while fetching dataset files
///
/// Parsing never fails: malformed quoting degrades to literal text and the
/// tokenizer always terminates with a best-effort row sequence. Every variant
/// here comes from the fetch boundary and names the dataset path it concerns.
#[derive(Error, Debug)]
pub enum PainelError {
    /// Non-success HTTP status when fetching a dataset
    #[error("falha ao carregar '{path}': HTTP {status}")]
    HttpStatus { path: String, status: u16 },

    /// Transport-level failure (DNS, connection, body decoding)
    #[error("falha ao carregar '{path}': {reason}")]
    Fetch { path: String, reason: String },

    /// Read failure from a directory-backed source
    #[error("falha ao ler '{path}': {reason}")]
    Io { path: String, reason: String },
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, PainelError>;
