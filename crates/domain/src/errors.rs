use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid request target: {0}")]
    InvalidRequestTarget(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport could not connect to {server}: {reason}")]
    TransportConnectFailed { server: String, reason: String },

    #[error("Transport request to {server} failed: {reason}")]
    TransportFailed { server: String, reason: String },

    #[error("Upstream {server} returned HTTP {status}")]
    UpstreamHttpStatus { server: String, status: u16 },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(#[source] serde_json::Error),
}

impl DomainError {
    /// Failures raised by the transport, before any body was decoded.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectFailed { .. }
                | DomainError::TransportFailed { .. }
                | DomainError::UpstreamHttpStatus { .. }
        )
    }
}
