use crate::ports::{DnsHandler, NextHandler, ResponseWriter};
use crate::services::{next_or_failure, ResponseSynthesizer};
use crate::use_cases::MetadataResolver;
use async_trait::async_trait;
use hickory_proto::op::{Message, Query, ResponseCode};
use hickory_proto::rr::RecordType;
use scitra_dns_domain::{AddressCodec, DomainError, EncodedAddress};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome for a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No SCION mapping; the next handler resolves normally.
    Delegate,
    /// Mapped name queried for A: answer with no records so the client
    /// falls back to AAAA.
    Suppress,
    /// Mapped name queried for AAAA: answer with the translated address.
    Answer(EncodedAddress),
}

impl Decision {
    pub fn decide(query_type: RecordType, mapping: Option<EncodedAddress>) -> Self {
        match (mapping, query_type) {
            (Some(_), RecordType::A) => Decision::Suppress,
            (Some(encoded), RecordType::AAAA) => Decision::Answer(encoded),
            _ => Decision::Delegate,
        }
    }
}

/// Handler that answers AAAA queries for SCION-enabled names with a
/// translated IPv6 address.
pub struct ScionTranslator {
    next: NextHandler,
    codec: AddressCodec,
    synthesizer: ResponseSynthesizer,
}

impl ScionTranslator {
    pub const NAME: &'static str = "scitra";

    pub fn new(codec: AddressCodec, synthesizer: ResponseSynthesizer) -> Self {
        Self {
            next: None,
            codec,
            synthesizer,
        }
    }

    pub fn with_next(mut self, next: Arc<dyn DnsHandler>) -> Self {
        self.next = Some(next);
        self
    }

    /// Translated address for the question's name, if it advertises one that
    /// fits the address layout.
    async fn lookup(
        &self,
        question: &Query,
        remote: Option<SocketAddr>,
    ) -> Result<Option<EncodedAddress>, DomainError> {
        let resolver = MetadataResolver::new(Self::NAME, self.next.as_ref());
        let Some(scion_addr) = resolver.resolve(question.name(), remote).await? else {
            return Ok(None);
        };
        debug!(name = %question.name(), scion = %scion_addr, "Found SCION address");

        match self.codec.encode(&scion_addr) {
            Ok(encoded) => Ok(Some(encoded)),
            Err(e) if e.is_range_error() => {
                info!(name = %question.name(), error = %e, "SCION address translation failed");
                Ok(None)
            }
            Err(e) => {
                debug!(name = %question.name(), error = %e, "SCION host not translatable");
                Ok(None)
            }
        }
    }
}

#[async_trait]
impl DnsHandler for ScionTranslator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn serve_dns(
        &self,
        request: &Message,
        writer: &mut dyn ResponseWriter,
    ) -> Result<ResponseCode, DomainError> {
        let question = match request.queries() {
            [question] => question,
            _ => return next_or_failure(Self::NAME, self.next.as_ref(), request, writer).await,
        };

        let query_type = question.query_type();
        let mapping = match query_type {
            RecordType::A | RecordType::AAAA => {
                self.lookup(question, writer.remote_addr()).await?
            }
            _ => None,
        };

        match Decision::decide(query_type, mapping) {
            Decision::Delegate => {
                next_or_failure(Self::NAME, self.next.as_ref(), request, writer).await
            }
            Decision::Suppress => {
                debug!(name = %question.name(), "Suppressed A query for SCION host");
                writer.write_message(&self.synthesizer.empty(request)).await?;
                Ok(ResponseCode::NoError)
            }
            Decision::Answer(encoded) => {
                debug!(name = %question.name(), address = %encoded, "Translated SCION address");
                writer
                    .write_message(&self.synthesizer.answer(request, encoded))
                    .await?;
                Ok(ResponseCode::NoError)
            }
        }
    }
}
