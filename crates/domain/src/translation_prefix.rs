use crate::errors::DomainError;
use ipnetwork::IpNetwork;
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

pub const DEFAULT_TRANSLATION_PREFIX: &str = "fc00::/8";

const REQUIRED_PREFIX_LEN: u8 = 8;

/// The /8 IPv6 block translated addresses are synthesized under.
///
/// Only the top octet is retained. It is taken from the prefix address as
/// written, so `fd::/8` yields `0x00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranslationPrefix {
    octet: u8,
}

impl TranslationPrefix {
    pub fn from_octet(octet: u8) -> Self {
        Self { octet }
    }

    pub fn octet(&self) -> u8 {
        self.octet
    }
}

impl Default for TranslationPrefix {
    fn default() -> Self {
        Self { octet: 0xfc }
    }
}

impl FromStr for TranslationPrefix {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let network = IpNetwork::from_str(s)
            .map_err(|e| DomainError::InvalidPrefix(format!("'{}': {}", s, e)))?;

        let v6 = match network {
            IpNetwork::V6(v6) if v6.ip().to_ipv4_mapped().is_none() => v6,
            _ => {
                return Err(DomainError::InvalidPrefix(format!(
                    "'{}' is not an IPv6 prefix",
                    s
                )))
            }
        };

        if v6.prefix() != REQUIRED_PREFIX_LEN {
            return Err(DomainError::InvalidPrefix(format!(
                "'{}' must be exactly /{} wide",
                s, REQUIRED_PREFIX_LEN
            )));
        }

        Ok(Self {
            octet: v6.ip().octets()[0],
        })
    }
}

impl fmt::Display for TranslationPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            Ipv6Addr::from(u128::from(self.octet) << 120),
            REQUIRED_PREFIX_LEN
        )
    }
}
