use thiserror::Error;

/// Errors that can be returned by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying HTTP transport failed.
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),

    /// The API answered with a non-success status, or with a body that could not be decoded.
    #[error("api returned status {status} with message: {body}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// More items were requested than the API allows in one call.
    #[error("the max size of request is {max} when you tried to request {requested}")]
    LimitExceeded {
        /// Amount asked for by the caller.
        requested: usize,
        /// Upper bound accepted by the API.
        max: usize,
    },

    /// A required field was absent from the payload.
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    /// A field was present but its value could not be coerced.
    #[error("invalid value `{value}` for field `{field}`")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// The raw value as received.
        value: String,
    },

    /// A file reference did not hold a valid absolute URL.
    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl {
        /// The rejected input.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// The autocomplete body did not follow the expected literal grammar.
    #[error("malformed autocomplete response at byte {position}: {reason}")]
    Autocomplete {
        /// Byte offset where parsing stopped.
        position: usize,
        /// What the parser expected.
        reason: String,
    },

    /// An autocomplete label had no parenthesized count.
    #[error("label `{0}` does not contain a count")]
    MissingCount(String),

    /// An XML body could not be parsed.
    #[error("{0}")]
    Xml(#[from] roxmltree::Error),

    /// Local filesystem failure while downloading.
    #[error("{}", _0)]
    IO(#[from] std::io::Error),
}
