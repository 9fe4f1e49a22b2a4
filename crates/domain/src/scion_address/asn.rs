use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

const ASN_BITS: u32 = 48;
const BGP_ASN_LIMIT: u64 = 1 << 32;
const GROUP_BITS: u32 = 16;
const GROUPS: usize = 3;

/// Autonomous system number, 48 bits wide.
///
/// Text form is plain decimal for BGP-style numbers below 2^32 and three
/// colon-separated hex groups (`ff00:0:110`) otherwise. Both notations are
/// accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Asn(pub u64);

impl Asn {
    pub const MAX: u64 = (1 << ASN_BITS) - 1;

    pub fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for Asn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| {
            DomainError::InvalidScionAddress(format!("invalid ASN '{}': {}", s, reason))
        };

        if s.contains('+') {
            return Err(invalid("sign not allowed"));
        }

        if !s.contains(':') {
            let value = s.parse::<u32>().map_err(|e| invalid(&e.to_string()))?;
            return Ok(Asn(u64::from(value)));
        }

        let groups: Vec<&str> = s.split(':').collect();
        if groups.len() != GROUPS {
            return Err(invalid("expected three colon-separated groups"));
        }

        let mut value: u64 = 0;
        for group in groups {
            if group.is_empty() {
                return Err(invalid("empty group"));
            }
            let part = u16::from_str_radix(group, 16).map_err(|e| invalid(&e.to_string()))?;
            value = (value << GROUP_BITS) | u64::from(part);
        }

        Ok(Asn(value))
    }
}

impl fmt::Display for Asn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < BGP_ASN_LIMIT {
            return write!(f, "{}", self.0);
        }
        let mask = (1u64 << GROUP_BITS) - 1;
        write!(
            f,
            "{:x}:{:x}:{:x}",
            (self.0 >> 32) & mask,
            (self.0 >> 16) & mask,
            self.0 & mask
        )
    }
}
