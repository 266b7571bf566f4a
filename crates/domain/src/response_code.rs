use std::fmt;

/// Raw response code values from the IANA DNS RCODE registry.
pub mod rcode {
    /// No Error [RFC1035]
    pub const NO_ERROR: i32 = 0;
    /// Format Error [RFC1035]
    pub const FORM_ERR: i32 = 1;
    /// Server Failure [RFC1035]
    pub const SERV_FAIL: i32 = 2;
    /// Non-Existent Domain [RFC1035]
    pub const NX_DOMAIN: i32 = 3;
    /// Not Implemented [RFC1035]
    pub const NOT_IMP: i32 = 4;
    /// Query Refused [RFC1035]
    pub const REFUSED: i32 = 5;
    /// Name Exists when it should not [RFC2136][RFC6672]
    pub const YX_DOMAIN: i32 = 6;
    /// RR Set Exists when it should not [RFC2136]
    pub const YX_RRSET: i32 = 7;
    /// RR Set that should exist does not [RFC2136]
    pub const NX_RRSET: i32 = 8;
    /// Not Authorized [RFC2136][RFC2845]
    pub const NOT_AUTH: i32 = 9;
    /// Name not contained in zone [RFC2136]
    pub const NOT_ZONE: i32 = 10;
    /// Bad OPT Version [RFC6891]
    pub const BADVERS: i32 = 16;
    /// TSIG Signature Failure [RFC2845]. Same value as [`BADVERS`].
    pub const BADSIG: i32 = 16;
    /// Key not recognized [RFC2845]
    pub const BADKEY: i32 = 17;
    /// Signature out of time window [RFC2845]
    pub const BADTIME: i32 = 18;
    /// Bad TKEY Mode [RFC2930]
    pub const BADMODE: i32 = 19;
    /// Duplicate key name [RFC2930]
    pub const BADNAME: i32 = 20;
    /// Algorithm not supported [RFC2930]
    pub const BADALG: i32 = 21;
    /// Bad Truncation [RFC4635]
    pub const BADTRUNC: i32 = 22;
    /// Bad/missing Server Cookie [RFC7873]
    pub const BADCOOKIE: i32 = 23;
}

/// Interpreted `Status` of a response.
///
/// Value 16 is registered twice, as BADVERS (EDNS version negotiation) and as
/// BADSIG (TSIG/SIG(0) verification). Both names map to the single
/// [`ResponseCode::BadVersOrSig`] variant; which meaning applies depends on
/// what the caller sent, so no choice is made here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    YXDomain,
    YXRRSet,
    NXRRSet,
    NotAuth,
    NotZone,
    BadVersOrSig,
    BadKey,
    BadTime,
    BadMode,
    BadName,
    BadAlg,
    BadTrunc,
    BadCookie,
    /// A value the registry table above does not name.
    Unknown(i32),
}

impl ResponseCode {
    pub const BADVERS: ResponseCode = ResponseCode::BadVersOrSig;
    pub const BADSIG: ResponseCode = ResponseCode::BadVersOrSig;

    pub fn from_status(status: i32) -> Self {
        match status {
            rcode::NO_ERROR => ResponseCode::NoError,
            rcode::FORM_ERR => ResponseCode::FormErr,
            rcode::SERV_FAIL => ResponseCode::ServFail,
            rcode::NX_DOMAIN => ResponseCode::NXDomain,
            rcode::NOT_IMP => ResponseCode::NotImp,
            rcode::REFUSED => ResponseCode::Refused,
            rcode::YX_DOMAIN => ResponseCode::YXDomain,
            rcode::YX_RRSET => ResponseCode::YXRRSet,
            rcode::NX_RRSET => ResponseCode::NXRRSet,
            rcode::NOT_AUTH => ResponseCode::NotAuth,
            rcode::NOT_ZONE => ResponseCode::NotZone,
            rcode::BADVERS => ResponseCode::BadVersOrSig,
            rcode::BADKEY => ResponseCode::BadKey,
            rcode::BADTIME => ResponseCode::BadTime,
            rcode::BADMODE => ResponseCode::BadMode,
            rcode::BADNAME => ResponseCode::BadName,
            rcode::BADALG => ResponseCode::BadAlg,
            rcode::BADTRUNC => ResponseCode::BadTrunc,
            rcode::BADCOOKIE => ResponseCode::BadCookie,
            other => ResponseCode::Unknown(other),
        }
    }

    pub fn to_status(&self) -> i32 {
        match self {
            ResponseCode::NoError => rcode::NO_ERROR,
            ResponseCode::FormErr => rcode::FORM_ERR,
            ResponseCode::ServFail => rcode::SERV_FAIL,
            ResponseCode::NXDomain => rcode::NX_DOMAIN,
            ResponseCode::NotImp => rcode::NOT_IMP,
            ResponseCode::Refused => rcode::REFUSED,
            ResponseCode::YXDomain => rcode::YX_DOMAIN,
            ResponseCode::YXRRSet => rcode::YX_RRSET,
            ResponseCode::NXRRSet => rcode::NX_RRSET,
            ResponseCode::NotAuth => rcode::NOT_AUTH,
            ResponseCode::NotZone => rcode::NOT_ZONE,
            ResponseCode::BadVersOrSig => rcode::BADVERS,
            ResponseCode::BadKey => rcode::BADKEY,
            ResponseCode::BadTime => rcode::BADTIME,
            ResponseCode::BadMode => rcode::BADMODE,
            ResponseCode::BadName => rcode::BADNAME,
            ResponseCode::BadAlg => rcode::BADALG,
            ResponseCode::BadTrunc => rcode::BADTRUNC,
            ResponseCode::BadCookie => rcode::BADCOOKIE,
            ResponseCode::Unknown(value) => *value,
        }
    }

    /// Every registry name for this code. Empty for unknown codes.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            ResponseCode::NoError => &["NoError"],
            ResponseCode::FormErr => &["FormErr"],
            ResponseCode::ServFail => &["ServFail"],
            ResponseCode::NXDomain => &["NXDomain"],
            ResponseCode::NotImp => &["NotImp"],
            ResponseCode::Refused => &["Refused"],
            ResponseCode::YXDomain => &["YXDomain"],
            ResponseCode::YXRRSet => &["YXRRSet"],
            ResponseCode::NXRRSet => &["NXRRSet"],
            ResponseCode::NotAuth => &["NotAuth"],
            ResponseCode::NotZone => &["NotZone"],
            ResponseCode::BadVersOrSig => &["BADVERS", "BADSIG"],
            ResponseCode::BadKey => &["BADKEY"],
            ResponseCode::BadTime => &["BADTIME"],
            ResponseCode::BadMode => &["BADMODE"],
            ResponseCode::BadName => &["BADNAME"],
            ResponseCode::BadAlg => &["BADALG"],
            ResponseCode::BadTrunc => &["BADTRUNC"],
            ResponseCode::BadCookie => &["BADCOOKIE"],
            ResponseCode::Unknown(_) => &[],
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ResponseCode::Unknown(_))
    }
}

impl From<i32> for ResponseCode {
    fn from(status: i32) -> Self {
        ResponseCode::from_status(status)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Unknown(value) => write!(f, "Unknown({})", value),
            known => write!(f, "{}", known.names().join("/")),
        }
    }
}
