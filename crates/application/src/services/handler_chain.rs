use crate::ports::{DnsHandler, ResponseWriter};
use hickory_proto::op::{Message, ResponseCode};
use scitra_dns_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Hands `request` to `next`, failing when `current` is the end of the chain.
pub async fn next_or_failure(
    current: &'static str,
    next: Option<&Arc<dyn DnsHandler>>,
    request: &Message,
    writer: &mut dyn ResponseWriter,
) -> Result<ResponseCode, DomainError> {
    match next {
        Some(handler) => {
            debug!(from = current, to = handler.name(), "Delegating to next handler");
            handler.serve_dns(request, writer).await
        }
        None => Err(DomainError::NoNextHandler(current)),
    }
}

/// Whether a handler returning `code` has already written its response.
///
/// Error-class codes mean nothing was written and the caller must answer.
pub fn client_wrote(code: ResponseCode) -> bool {
    !matches!(
        code,
        ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::FormErr | ResponseCode::NotImp
    )
}
