//! Error types for loading and processing the error table.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("error code key `{0}` is not a non-negative integer")]
    InvalidCode(String),

    #[error("keys `{first_key}` and `{second_key}` both name error code {code}")]
    DuplicateCode {
        code: u32,
        first_key: String,
        second_key: String,
    },

    #[error("input is not a JSON object keyed by error code")]
    NotAnObject,

    #[error("record {code}: {source}")]
    Record {
        code: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
