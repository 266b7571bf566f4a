//! JSON codec for DNS-over-HTTPS responses.

use cfdns_domain::{DnsResponse, DomainError};

/// Decode a resolver body. Unknown fields are ignored and missing sections
/// decode as empty; the status code is not checked here.
pub fn decode(bytes: &[u8]) -> Result<DnsResponse, DomainError> {
    serde_json::from_slice(bytes).map_err(DomainError::InvalidDnsResponse)
}

pub fn encode(response: &DnsResponse) -> Result<Vec<u8>, DomainError> {
    serde_json::to_vec(response).map_err(DomainError::InvalidDnsResponse)
}
