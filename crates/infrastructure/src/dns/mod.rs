pub mod codec;
pub mod query_builder;
pub mod request;
pub mod transport;

pub use request::DnsRequest;
pub use transport::{DohTransport, HttpsTransport, TransportResponse};
