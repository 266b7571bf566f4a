//! DNS-over-HTTPS JSON client: request construction, transport and response decoding.
pub mod dns;
