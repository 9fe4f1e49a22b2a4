use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Isolation domain identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Isd(pub u16);

impl Isd {
    /// ISDs at or above this value do not fit the 12-bit field of a
    /// translated address.
    pub const ENCODABLE_LIMIT: u16 = 1 << 12;

    pub fn value(self) -> u16 {
        self.0
    }
}

impl FromStr for Isd {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('+') {
            return Err(DomainError::InvalidScionAddress(format!(
                "invalid ISD '{}': sign not allowed",
                s
            )));
        }
        s.parse::<u16>()
            .map(Isd)
            .map_err(|e| DomainError::InvalidScionAddress(format!("invalid ISD '{}': {}", s, e)))
    }
}

impl fmt::Display for Isd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
