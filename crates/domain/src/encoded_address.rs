//! Translation of SCION addresses into IPv6 addresses.
//!
//! Layout of a translated address:
//!
//! ```text
//!  0        1                4                7                        15
//! +--------+----------------+----------------+-------------------------+
//! | prefix | ISD(12) | f(1) | local prefix   | host suffix             |
//! |        | ASN(19)        | + subnet (0)   |                         |
//! +--------+----------------+----------------+-------------------------+
//! ```
//!
//! `f` selects between the direct ASN range (`ASN < 2^19`) and the
//! BGP-compatible public range (`2:0:0` to `2:7:ffff`). IPv4 hosts are stored
//! as `::ffff:a.b.c.d` in the suffix; IPv6 hosts keep only their interface
//! identifier. The mapping is one-way: there is no decoder, and the dropped
//! upper half of an IPv6 host cannot be recovered.

use crate::errors::DomainError;
use crate::scion_address::{Isd, ScionAddr};
use crate::translation_prefix::TranslationPrefix;
use std::fmt;
use std::net::{IpAddr, Ipv6Addr};

const DIRECT_ASN_LIMIT: u64 = 1 << 19;
const PUBLIC_ASN_FIRST: u64 = 0x2_0000_0000;
const PUBLIC_ASN_LAST: u64 = 0x2_0007_ffff;
const PUBLIC_ASN_FLAG: u32 = 1 << 19;
const PUBLIC_ASN_MASK: u64 = 0x7ffff;
const ISD_SHIFT: u32 = 20;
const IPV4_MARKER: u32 = 0xffff;

/// Reserved bytes 5..8 of a translated address.
///
/// Always zero for now; carried explicitly so the layout does not change once
/// local prefixes and subnets get populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LocalPrefix {
    pub prefix: u16,
    pub subnet: u8,
}

impl LocalPrefix {
    fn to_bytes(self) -> [u8; 3] {
        let [hi, lo] = self.prefix.to_be_bytes();
        [hi, lo, self.subnet]
    }
}

/// A SCION address translated into the IPv6 address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedAddress([u8; 16]);

impl EncodedAddress {
    pub fn octets(&self) -> [u8; 16] {
        self.0
    }

    pub fn to_ipv6(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.0)
    }

    pub fn prefix_octet(&self) -> u8 {
        self.0[0]
    }

    /// The packed ISD/ASN field stored in bytes 1..5.
    pub fn packed_ia(&self) -> u32 {
        u32::from_be_bytes([self.0[1], self.0[2], self.0[3], self.0[4]])
    }
}

impl From<EncodedAddress> for Ipv6Addr {
    fn from(addr: EncodedAddress) -> Self {
        addr.to_ipv6()
    }
}

impl fmt::Display for EncodedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ipv6())
    }
}

/// Encodes SCION addresses under a fixed translation prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressCodec {
    prefix: TranslationPrefix,
    local_prefix: LocalPrefix,
}

impl AddressCodec {
    pub fn new(prefix: TranslationPrefix) -> Self {
        Self {
            prefix,
            local_prefix: LocalPrefix::default(),
        }
    }

    pub fn prefix(&self) -> TranslationPrefix {
        self.prefix
    }

    pub fn encode(&self, addr: &ScionAddr) -> Result<EncodedAddress, DomainError> {
        let mut out = [0u8; 16];
        out[0] = self.prefix.octet();

        let ia = Self::pack_ia(addr)?;
        out[1..5].copy_from_slice(&ia.to_be_bytes());

        let host = addr
            .host_ip()
            .ok_or_else(|| DomainError::UnsupportedHost(addr.to_string()))?;

        match host {
            IpAddr::V4(v4) => {
                out[8..12].copy_from_slice(&IPV4_MARKER.to_be_bytes());
                out[12..16].copy_from_slice(&v4.octets());
            }
            IpAddr::V6(v6) => {
                out[5..8].copy_from_slice(&self.local_prefix.to_bytes());
                out[8..16].copy_from_slice(&v6.octets()[8..16]);
            }
        }

        Ok(EncodedAddress(out))
    }

    fn pack_ia(addr: &ScionAddr) -> Result<u32, DomainError> {
        let isd = addr.isd().value();
        if isd >= Isd::ENCODABLE_LIMIT {
            return Err(DomainError::IsdNotEncodable(addr.to_string()));
        }
        let isd = u32::from(isd) << ISD_SHIFT;

        let asn = addr.asn().value();
        if asn < DIRECT_ASN_LIMIT {
            Ok(isd | asn as u32)
        } else if (PUBLIC_ASN_FIRST..=PUBLIC_ASN_LAST).contains(&asn) {
            Ok(isd | PUBLIC_ASN_FLAG | (asn & PUBLIC_ASN_MASK) as u32)
        } else {
            Err(DomainError::AsnNotEncodable(addr.to_string()))
        }
    }
}
