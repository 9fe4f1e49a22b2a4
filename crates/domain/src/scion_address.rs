//! SCION addresses as advertised in `scion=` attribute records.
//!
//! An [`IsdAsn`] identifies an AS inside an isolation domain, a [`HostAddr`]
//! identifies a host inside that AS, and together they form a [`ScionAddr`]
//! with the text form `"<ISD>-<ASN>,<Host>"`.

mod asn;
mod host;
mod ia;
mod isd;

pub use asn::Asn;
pub use host::{HostAddr, ServiceAddr};
pub use ia::IsdAsn;
pub use isd::Isd;

use crate::errors::DomainError;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScionAddr {
    pub ia: IsdAsn,
    pub host: HostAddr,
}

impl ScionAddr {
    pub fn new(ia: IsdAsn, host: HostAddr) -> Self {
        Self { ia, host }
    }

    pub fn isd(&self) -> Isd {
        self.ia.isd
    }

    pub fn asn(&self) -> Asn {
        self.ia.asn
    }

    /// Returns the host IP with IPv4-mapped IPv6 addresses unmapped, or `None`
    /// for service hosts.
    pub fn host_ip(&self) -> Option<IpAddr> {
        match self.host {
            HostAddr::Ip(ip) => Some(ip.to_canonical()),
            HostAddr::Svc(_) => None,
        }
    }
}

impl FromStr for ScionAddr {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ia, host) = s
            .rsplit_once(',')
            .ok_or_else(|| DomainError::InvalidScionAddress(format!("missing host in '{}'", s)))?;

        Ok(Self {
            ia: ia.parse()?,
            host: host.parse()?,
        })
    }
}

impl fmt::Display for ScionAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.ia, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_parse_ipv4_host() {
        let addr: ScionAddr = "1-ff00:0:110,10.0.0.1".parse().unwrap();
        assert_eq!(addr.isd(), Isd(1));
        assert_eq!(addr.asn(), Asn(0xff00_0000_0110));
        assert_eq!(addr.host, HostAddr::Ip(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))));
    }

    #[test]
    fn test_parse_splits_on_last_comma() {
        assert!("1-ff00:0:110,10.0.0.1,10.0.0.2".parse::<ScionAddr>().is_err());
    }

    #[test]
    fn test_parse_missing_host() {
        assert!(matches!(
            "1-ff00:0:110".parse::<ScionAddr>(),
            Err(DomainError::InvalidScionAddress(_))
        ));
    }

    #[test]
    fn test_parse_rejects_signed_ia() {
        assert!("+1-+64512,10.0.0.1".parse::<ScionAddr>().is_err());
        assert!("1-+64512,10.0.0.1".parse::<ScionAddr>().is_err());
    }

    #[test]
    fn test_host_ip_unmaps_ipv4_mapped() {
        let addr: ScionAddr = "1-64512,::ffff:192.0.2.7".parse().unwrap();
        assert_eq!(addr.host_ip(), Some(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 7))));
    }

    #[test]
    fn test_service_host_has_no_ip() {
        let addr: ScionAddr = "1-ff00:0:110,CS".parse().unwrap();
        assert_eq!(addr.host_ip(), None);
    }

    #[test]
    fn test_display() {
        let addr: ScionAddr = "64-2:0:9,fd00::1".parse().unwrap();
        assert_eq!(addr.to_string(), "64-2:0:9,fd00::1");
    }
}
