//! Error types for the provider clients.

/// Errors that can occur when fetching or mapping provider responses.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The provider returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The provider returned no data rows.
    #[error("Empty response")]
    EmptyResponse,
    /// A CSV row did not have the expected shape or a column failed to convert.
    #[error("Malformed CSV at line {line}: {reason}")]
    MalformedCsv { line: usize, reason: String },
    /// The JSON body did not match the `result.rows[].values[]` shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// A mapped statement field carried a value of the wrong kind.
    #[error("Invalid value {value:?} for field {field}: {reason}")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },
    /// The request URL could not be built from the base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
