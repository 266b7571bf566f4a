#![allow(dead_code)]
use cfdns_domain::{DnsResponse, Question, RecordType, ResourceRecord};

pub struct DnsResponseBuilder {
    response: DnsResponse,
}

impl DnsResponseBuilder {
    pub fn new() -> Self {
        Self {
            response: DnsResponse {
                recursion_desired: true,
                recursion_available: true,
                ..Default::default()
            },
        }
    }

    pub fn status(mut self, status: i32) -> Self {
        self.response.status = status;
        self
    }

    pub fn authenticated(mut self, ad: bool) -> Self {
        self.response.authenticated_data = ad;
        self
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.response
            .question
            .push(Question::new(name, record_type.to_u16()));
        self
    }

    pub fn answer(mut self, name: &str, record_type: RecordType, ttl: u32, data: &str) -> Self {
        self.response.answer.push(ResourceRecord::new(
            name,
            record_type.to_u16(),
            ttl,
            data,
        ));
        self
    }

    pub fn authority(mut self, name: &str, record_type: RecordType, ttl: u32, data: &str) -> Self {
        self.response.authority.push(ResourceRecord::new(
            name,
            record_type.to_u16(),
            ttl,
            data,
        ));
        self
    }

    pub fn build(self) -> DnsResponse {
        self.response
    }
}
