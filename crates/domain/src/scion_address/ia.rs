use super::{Asn, Isd};
use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsdAsn {
    pub isd: Isd,
    pub asn: Asn,
}

impl IsdAsn {
    pub fn new(isd: Isd, asn: Asn) -> Self {
        Self { isd, asn }
    }
}

impl FromStr for IsdAsn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (isd, asn) = s
            .split_once('-')
            .ok_or_else(|| DomainError::InvalidScionAddress(format!("invalid ISD-AS '{}'", s)))?;

        Ok(Self {
            isd: isd.parse()?,
            asn: asn.parse()?,
        })
    }
}

impl fmt::Display for IsdAsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.isd, self.asn)
    }
}
