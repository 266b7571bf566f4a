use super::codec;
use super::query_builder;
use super::transport::{DohTransport, HttpsTransport};
use cfdns_domain::{DnsResponse, DomainError, RecordType, ResolverConfig};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// A reusable query for one record type.
///
/// Holds the transport, the record type and the resolver endpoint. Nothing
/// in it changes after construction, so a single value (or its clones,
/// which share the transport) can serve concurrent `execute` calls.
#[derive(Clone)]
pub struct DnsRequest {
    transport: Arc<dyn DohTransport>,
    record_type: RecordType,
    config: Arc<ResolverConfig>,
}

impl DnsRequest {
    /// Query `record_type` against the default resolver with a fresh HTTPS
    /// transport using the default 5 second timeout.
    pub fn new(record_type: RecordType) -> Self {
        Self::from_config(record_type, ResolverConfig::default())
    }

    /// Query `record_type` against `config`'s resolver with a fresh HTTPS
    /// transport bounded by `config`'s timeout.
    pub fn from_config(record_type: RecordType, config: ResolverConfig) -> Self {
        Self {
            transport: Arc::new(HttpsTransport::new(config.timeout())),
            record_type,
            config: Arc::new(config),
        }
    }

    pub fn with_transport(record_type: RecordType, transport: Arc<dyn DohTransport>) -> Self {
        Self {
            transport,
            record_type,
            config: Arc::new(ResolverConfig::default()),
        }
    }

    /// Replace the resolver endpoint. The transport, and so its timeout, is
    /// kept as is.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `hostname` within the transport's own timeout.
    ///
    /// Pass a bare host name, not a URL.
    pub async fn execute(&self, hostname: &str) -> Result<DnsResponse, DomainError> {
        self.resolve(hostname, None).await
    }

    /// Resolve `hostname`, bounding the round trip by the caller's `timeout`
    /// instead of the transport's.
    pub async fn execute_with_timeout(
        &self,
        hostname: &str,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        self.resolve(hostname, Some(timeout)).await
    }

    async fn resolve(
        &self,
        hostname: &str,
        deadline: Option<Duration>,
    ) -> Result<DnsResponse, DomainError> {
        let url = query_builder::build(&self.config, hostname, self.record_type)?;

        debug!(
            hostname = %hostname,
            record_type = %self.record_type,
            protocol = self.transport.protocol_name(),
            "Resolving via DoH JSON"
        );

        let response = self.transport.send(&url, deadline).await?;
        let decoded = codec::decode(&response.bytes)?;

        debug!(
            hostname = %hostname,
            record_type = %self.record_type,
            status = decoded.status,
            answers = decoded.answer.len(),
            "DoH JSON query resolved"
        );

        Ok(decoded)
    }
}

impl fmt::Debug for DnsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsRequest")
            .field("record_type", &self.record_type)
            .field("protocol", &self.transport.protocol_name())
            .field("config", &self.config)
            .finish()
    }
}
