use crate::errors::DomainError;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAddr {
    Ip(IpAddr),
    Svc(ServiceAddr),
}

impl HostAddr {
    pub fn is_ip(&self) -> bool {
        matches!(self, HostAddr::Ip(_))
    }
}

impl FromStr for HostAddr {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(HostAddr::Ip(ip));
        }
        s.parse::<ServiceAddr>().map(HostAddr::Svc)
    }
}

impl fmt::Display for HostAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostAddr::Ip(ip) => write!(f, "{}", ip),
            HostAddr::Svc(svc) => write!(f, "{}", svc),
        }
    }
}

/// Anycast or multicast service address (control service, discovery, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceAddr(u16);

impl ServiceAddr {
    pub const DS: ServiceAddr = ServiceAddr(0x0001);
    pub const CS: ServiceAddr = ServiceAddr(0x0002);
    pub const WILDCARD: ServiceAddr = ServiceAddr(0x0010);

    const MULTICAST: u16 = 0x8000;

    pub fn multicast(self) -> Self {
        ServiceAddr(self.0 | Self::MULTICAST)
    }

    pub fn is_multicast(self) -> bool {
        self.0 & Self::MULTICAST != 0
    }

    fn base_name(self) -> &'static str {
        match self.0 & !Self::MULTICAST {
            0x0001 => "DS",
            0x0002 => "CS",
            0x0010 => "Wildcard",
            _ => "UNKNOWN",
        }
    }
}

impl FromStr for ServiceAddr {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, multicast) = match s.rsplit_once('_') {
            Some((base, "A")) => (base, false),
            Some((base, "M")) => (base, true),
            Some(_) => {
                return Err(DomainError::InvalidScionAddress(format!(
                    "invalid host '{}'",
                    s
                )))
            }
            None => (s, false),
        };

        let svc = match base {
            "DS" => ServiceAddr::DS,
            "CS" => ServiceAddr::CS,
            "Wildcard" => ServiceAddr::WILDCARD,
            _ => {
                return Err(DomainError::InvalidScionAddress(format!(
                    "invalid host '{}'",
                    s
                )))
            }
        };

        Ok(if multicast { svc.multicast() } else { svc })
    }
}

impl fmt::Display for ServiceAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_multicast() {
            write!(f, "{}_M", self.base_name())
        } else {
            f.write_str(self.base_name())
        }
    }
}
