mod record;
mod record_type;

pub use record::{Question, ResourceRecord};
pub use record_type::RecordType;
