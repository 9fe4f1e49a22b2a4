#![allow(dead_code)]
use scitra_dns_domain::{Asn, HostAddr, Isd, IsdAsn, ScionAddr};
use std::net::{IpAddr, Ipv4Addr};

pub struct ScionAddrBuilder {
    isd: u16,
    asn: u64,
    host: IpAddr,
}

impl ScionAddrBuilder {
    pub fn new() -> Self {
        Self {
            isd: 1,
            asn: 0xfc02,
            host: IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
        }
    }

    pub fn isd(mut self, isd: u16) -> Self {
        self.isd = isd;
        self
    }

    pub fn asn(mut self, asn: u64) -> Self {
        self.asn = asn;
        self
    }

    pub fn host(mut self, host: &str) -> Self {
        self.host = host.parse().unwrap();
        self
    }

    pub fn build(self) -> ScionAddr {
        ScionAddr::new(
            IsdAsn::new(Isd(self.isd), Asn(self.asn)),
            HostAddr::Ip(self.host),
        )
    }
}

impl Default for ScionAddrBuilder {
    fn default() -> Self {
        Self::new()
    }
}
