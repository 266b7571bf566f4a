//! Builds the request target for a DNS-over-HTTPS JSON query.
//!
//! The hostname is caller data and only ever travels as the value of the
//! `name` query parameter, percent-encoded. It can never reach the scheme,
//! authority or path of the target.

use cfdns_domain::{DomainError, RecordType, ResolverConfig};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Url;

/// Content type asking the resolver for the JSON rendering of the answer.
pub const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

/// Everything but RFC 3986 unreserved characters is escaped, so `+`, `&`,
/// `=`, `#` and `%` in a hostname survive a strict percent-decode unchanged.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn build(
    config: &ResolverConfig,
    hostname: &str,
    record_type: RecordType,
) -> Result<Url, DomainError> {
    let base = format!("https://{}{}", config.host, config.path);
    let mut url = Url::parse(&base).map_err(|e| {
        DomainError::InvalidRequestTarget(format!("resolver endpoint {}: {}", base, e))
    })?;

    if !url.username().is_empty()
        || url.password().is_some()
        || url.path() != config.path
        || url.query().is_some()
        || url.fragment().is_some()
    {
        return Err(DomainError::InvalidRequestTarget(format!(
            "resolver endpoint {} must be a bare host and path",
            base
        )));
    }

    let query = format!(
        "ct={}&name={}&type={}",
        DNS_JSON_CONTENT_TYPE,
        utf8_percent_encode(hostname, QUERY_VALUE),
        record_type.as_str()
    );
    url.set_query(Some(&query));

    // The serialized target must parse back to the same resolver authority.
    let target = Url::parse(url.as_str())
        .map_err(|e| DomainError::InvalidRequestTarget(format!("{}: {}", url, e)))?;

    let same_authority = target.host_str() == url.host_str()
        && target.port_or_known_default() == url.port_or_known_default();
    if target.scheme() != "https" || !same_authority {
        return Err(DomainError::InvalidRequestTarget(format!(
            "target {} does not address resolver {}",
            target, config.host
        )));
    }

    Ok(target)
}
