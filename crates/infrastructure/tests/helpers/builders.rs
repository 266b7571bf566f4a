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

    pub fn truncated(mut self, tc: bool) -> Self {
        self.response.truncated = tc;
        self
    }

    pub fn authenticated(mut self, ad: bool) -> Self {
        self.response.authenticated_data = ad;
        self
    }

    pub fn checking_disabled(mut self, cd: bool) -> Self {
        self.response.checking_disabled = cd;
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

    pub fn to_json(self) -> Vec<u8> {
        serde_json::to_vec(&self.response).unwrap()
    }
}

/// Body Cloudflare returns for `one.one.one.one` A.
pub fn one_one_one_one_a_body() -> Vec<u8> {
    br#"{"Status":0,"TC":false,"RD":true,"RA":true,"AD":false,"CD":false,
"Question":[{"name":"one.one.one.one","type":1}],
"Answer":[{"name":"one.one.one.one","type":1,"TTL":261,"data":"1.1.1.1"},
{"name":"one.one.one.one","type":1,"TTL":261,"data":"1.0.0.1"}]}"#
        .to_vec()
}

/// NXDOMAIN body with the SOA of the closest enclosing zone.
pub fn nxdomain_body() -> Vec<u8> {
    br#"{"Status":3,"TC":false,"RD":true,"RA":true,"AD":true,"CD":false,
"Question":[{"name":"does-not-exist.example.com","type":1}],
"Authority":[{"name":"example.com","type":6,"TTL":3600,
"data":"ns.icann.org. noc.dns.icann.org. 2024081485 7200 3600 1209600 3600"}]}"#
        .to_vec()
}
