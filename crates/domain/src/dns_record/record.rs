use super::RecordType;
use serde::{Deserialize, Serialize};

/// One entry of the answer or authority section.
///
/// `data` is kept exactly as the resolver rendered it; its format depends on
/// `record_type` and is never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ResourceRecord {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub record_type: u16,

    #[serde(rename = "TTL", default)]
    pub ttl: u32,

    #[serde(default)]
    pub data: String,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: u16,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }

    /// Catalog type of this record, `None` for types outside the catalog.
    pub fn known_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.record_type)
    }

    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.record_type == record_type.to_u16()
    }
}

/// Echo of the question the resolver answered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Question {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub record_type: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, record_type: u16) -> Self {
        Self {
            name: name.into(),
            record_type,
        }
    }
}
