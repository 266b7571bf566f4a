pub mod https;

use async_trait::async_trait;
use cfdns_domain::DomainError;
use reqwest::Url;
use std::time::Duration;

pub use https::HttpsTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// Carries one DNS-over-HTTPS GET to the resolver.
///
/// Implementations perform exactly one round trip per call and never retry.
/// A `Some` deadline bounds the whole exchange and takes precedence over the
/// implementation's own timeout; `None` leaves that timeout in charge.
#[async_trait]
pub trait DohTransport: Send + Sync {
    async fn send(
        &self,
        url: &Url,
        deadline: Option<Duration>,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
