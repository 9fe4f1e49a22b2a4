use scitra_dns_application::ports::DnsHandler;
use scitra_dns_application::services::ResponseSynthesizer;
use scitra_dns_application::use_cases::ScionTranslator;
use scitra_dns_domain::{AddressCodec, Config};
use scitra_dns_infrastructure::dns::{DnsForwarder, DnsServerHandler, ForwardHandler};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub handler: Arc<DnsServerHandler>,
}

impl DnsServices {
    /// Wire the handler chain: translator first, forwarder last.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let forward = Arc::new(ForwardHandler::new(Self::build_forwarder(config)?));

        let prefix = config.translation.translation_prefix()?;
        let translator = ScionTranslator::new(
            AddressCodec::new(prefix),
            ResponseSynthesizer::new(config.translation.ttl),
        )
        .with_next(forward);

        info!(
            prefix = %prefix,
            ttl = config.translation.ttl,
            upstreams = config.upstream.servers.len(),
            "Handler chain ready"
        );

        let chain: Arc<dyn DnsHandler> = Arc::new(translator);
        let handler = Arc::new(DnsServerHandler::new(chain));

        Ok(Self { handler })
    }

    fn build_forwarder(config: &Config) -> anyhow::Result<DnsForwarder> {
        let servers = config
            .upstream
            .servers
            .iter()
            .map(|server| server.parse::<SocketAddr>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DnsForwarder::new(
            servers,
            Duration::from_millis(config.upstream.timeout_ms),
            config.upstream.tcp_fallback,
        ))
    }
}
