//! HTTPS transport for DNS-over-HTTPS JSON queries.
//!
//! Sends a bodiless GET and returns the raw response body. The JSON payload
//! is decoded elsewhere; this layer only moves bytes.
//!
//! Wire format (HTTP):
//! ```text
//! GET /dns-query?ct=application/dns-json&name=example.com&type=A HTTP/1.1
//! Host: cloudflare-dns.com
//! ```

use super::{DohTransport, TransportResponse};
use async_trait::async_trait;
use cfdns_domain::DomainError;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, warn};

/// Default client timeout when none is supplied.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// DNS-over-HTTPS transport backed by a `reqwest` client.
///
/// The client pools connections internally, so one transport can be shared
/// by any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct HttpsTransport {
    client: reqwest::Client,
}

impl HttpsTransport {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client }
    }

    /// Wrap a caller-built client, keeping its TLS, proxy and timeout setup.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpsTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

fn server_of(url: &Url) -> String {
    url.host_str().unwrap_or("<no host>").to_string()
}

fn map_send_error(url: &Url, e: reqwest::Error) -> DomainError {
    let server = server_of(url);
    if e.is_timeout() {
        DomainError::TransportTimeout { server }
    } else if e.is_connect() {
        DomainError::TransportConnectFailed {
            server,
            reason: e.to_string(),
        }
    } else {
        DomainError::TransportFailed {
            server,
            reason: e.to_string(),
        }
    }
}

#[async_trait]
impl DohTransport for HttpsTransport {
    async fn send(
        &self,
        url: &Url,
        deadline: Option<Duration>,
    ) -> Result<TransportResponse, DomainError> {
        debug!(url = %url, deadline = ?deadline, "Sending DoH JSON query");

        let mut request = self.client.get(url.clone());
        if let Some(deadline) = deadline {
            request = request.timeout(deadline);
        }

        let response = request
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "DoH request failed");
                map_send_error(url, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "DoH server returned error status");
            return Err(DomainError::UpstreamHttpStatus {
                server: server_of(url),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| map_send_error(url, e))?;

        debug!(
            url = %url,
            response_len = bytes.len(),
            "DoH response received"
        );

        Ok(TransportResponse {
            bytes: bytes.to_vec(),
            protocol_used: "HTTPS",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "HTTPS"
    }
}
