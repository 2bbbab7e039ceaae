//! Transport layer error types.

/// Error raised below the API layer: sockets, TLS, timeouts.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to reach the server.
    #[error("Connection error: {0}")]
    Connection(String),
    /// The request or connect timeout elapsed.
    #[error("Timeout")]
    Timeout,
    /// The request could not be completed once connected.
    #[error("Request error: {0}")]
    Request(String),
}
