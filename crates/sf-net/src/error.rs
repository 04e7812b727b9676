//! Error types for sfsdk-net.

/// Result type alias for facade operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for facade operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// The transport error behind this failure, if any.
    pub fn transport_error(&self) -> Option<&sfsdk_client::Error> {
        self.source.as_ref()?.downcast_ref::<sfsdk_client::Error>()
    }

    /// Returns true if the requested object type does not exist.
    pub fn is_unknown_object(&self) -> bool {
        matches!(self.kind, ErrorKind::UnknownObject(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Network, HTTP status or authentication failure reported by the transport.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body does not have the expected shape.
    #[error("Malformed response from {endpoint}: {message}")]
    MalformedResponse { endpoint: String, message: String },

    /// The object type passed to describe/metadata does not exist.
    #[error("Unknown object type: {0}")]
    UnknownObject(String),

    /// The caller passed an argument that can never produce a valid request.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<sfsdk_client::Error> for Error {
    fn from(err: sfsdk_client::Error) -> Self {
        Error::with_source(ErrorKind::Transport(err.to_string()), err)
    }
}
