//! cfdns domain layer: the JSON DNS response model, the record-type catalog
//! and the response-code table.
pub mod config;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod response_code;

pub use config::{ConfigError, ResolverConfig};
pub use dns_record::{Question, RecordType, ResourceRecord};
pub use dns_response::DnsResponse;
pub use errors::DomainError;
pub use response_code::{rcode, ResponseCode};
