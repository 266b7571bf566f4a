use std::fmt;
use std::str::FromStr;

/// Record types the resolver can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CAA,
    CDNSKEY,
    CDS,
    CERT,
    CNAME,
    DNAME,
    IPSECKEY,
    LOC,
    MX,
    NAPTR,
    NS,
    PTR,
    RRSIG,
    SOA,
    TLSA,
    TSIG,
    TXT,
    URI,
}

impl RecordType {
    pub const ALL: [RecordType; 20] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::CAA,
        RecordType::CDNSKEY,
        RecordType::CDS,
        RecordType::CERT,
        RecordType::CNAME,
        RecordType::DNAME,
        RecordType::IPSECKEY,
        RecordType::LOC,
        RecordType::MX,
        RecordType::NAPTR,
        RecordType::NS,
        RecordType::PTR,
        RecordType::RRSIG,
        RecordType::SOA,
        RecordType::TLSA,
        RecordType::TSIG,
        RecordType::TXT,
        RecordType::URI,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CAA => "CAA",
            RecordType::CDNSKEY => "CDNSKEY",
            RecordType::CDS => "CDS",
            RecordType::CERT => "CERT",
            RecordType::CNAME => "CNAME",
            RecordType::DNAME => "DNAME",
            RecordType::IPSECKEY => "IPSECKEY",
            RecordType::LOC => "LOC",
            RecordType::MX => "MX",
            RecordType::NAPTR => "NAPTR",
            RecordType::NS => "NS",
            RecordType::PTR => "PTR",
            RecordType::RRSIG => "RRSIG",
            RecordType::SOA => "SOA",
            RecordType::TLSA => "TLSA",
            RecordType::TSIG => "TSIG",
            RecordType::TXT => "TXT",
            RecordType::URI => "URI",
        }
    }

    /// IANA type number, as found in the `type` field of answer records.
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::LOC => 29,
            RecordType::NAPTR => 35,
            RecordType::CERT => 37,
            RecordType::DNAME => 39,
            RecordType::IPSECKEY => 45,
            RecordType::RRSIG => 46,
            RecordType::TLSA => 52,
            RecordType::CDS => 59,
            RecordType::CDNSKEY => 60,
            RecordType::TSIG => 250,
            RecordType::URI => 256,
            RecordType::CAA => 257,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            12 => Some(RecordType::PTR),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            28 => Some(RecordType::AAAA),
            29 => Some(RecordType::LOC),
            35 => Some(RecordType::NAPTR),
            37 => Some(RecordType::CERT),
            39 => Some(RecordType::DNAME),
            45 => Some(RecordType::IPSECKEY),
            46 => Some(RecordType::RRSIG),
            52 => Some(RecordType::TLSA),
            59 => Some(RecordType::CDS),
            60 => Some(RecordType::CDNSKEY),
            250 => Some(RecordType::TSIG),
            256 => Some(RecordType::URI),
            257 => Some(RecordType::CAA),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        RecordType::ALL
            .into_iter()
            .find(|rt| rt.as_str() == upper)
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}
