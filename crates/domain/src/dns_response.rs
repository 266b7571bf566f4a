use crate::dns_record::{Question, RecordType, ResourceRecord};
use crate::response_code::{rcode, ResponseCode};
use serde::{Deserialize, Deserializer, Serialize};

/// A DNS response in the resolver's JSON form.
///
/// Field names on the wire are the abbreviated header names used by
/// DNS-over-HTTPS JSON APIs (`Status`, `TC`, `RD`, ...). Every field is
/// optional on the wire; absent sections decode as empty and absent flags as
/// `false`. Section order is preserved exactly as the resolver sent it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DnsResponse {
    #[serde(rename = "Status")]
    pub status: i32,

    #[serde(rename = "TC")]
    pub truncated: bool,

    #[serde(rename = "RD")]
    pub recursion_desired: bool,

    #[serde(rename = "RA")]
    pub recursion_available: bool,

    #[serde(rename = "AD")]
    pub authenticated_data: bool,

    #[serde(rename = "CD")]
    pub checking_disabled: bool,

    #[serde(rename = "Question", deserialize_with = "null_as_empty")]
    pub question: Vec<Question>,

    #[serde(rename = "Answer", deserialize_with = "null_as_empty")]
    pub answer: Vec<ResourceRecord>,

    #[serde(rename = "Authority", deserialize_with = "null_as_empty")]
    pub authority: Vec<ResourceRecord>,
}

impl DnsResponse {
    /// `true` only for NOERROR.
    pub fn is_success(&self) -> bool {
        self.status == rcode::NO_ERROR
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from_status(self.status)
    }

    /// The answer did not fit in a single message. DoH resolvers support
    /// the maximum message size, so this is rarely set.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn recursion_was_desired(&self) -> bool {
        self.recursion_desired
    }

    pub fn recursion_was_available(&self) -> bool {
        self.recursion_available
    }

    /// The resolver claims every record in the answer was validated with
    /// DNSSEC. No validation happens locally.
    pub fn dnssec_authenticated(&self) -> bool {
        self.authenticated_data
    }

    /// The client asked the resolver to skip DNSSEC validation.
    pub fn dnssec_checking_disabled(&self) -> bool {
        self.checking_disabled
    }

    /// Answer records of one type, in resolver order. Useful when the answer
    /// also carries the CNAME chain that led to them.
    pub fn answers_of_type(
        &self,
        record_type: RecordType,
    ) -> impl Iterator<Item = &ResourceRecord> {
        self.answer.iter().filter(move |rr| rr.is_type(record_type))
    }

    pub fn first_answer_data(&self) -> Option<&str> {
        self.answer.first().map(|rr| rr.data.as_str())
    }
}

// A JSON `null` section means the same as an absent one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
