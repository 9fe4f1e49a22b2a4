use crate::dns::forwarding::MessageBuilder;
use hickory_proto::op::{Message, MessageType, Query, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use scitra_dns_application::ports::DnsHandler;
use scitra_dns_application::services::{client_wrote, CaptureWriter};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Entry point between the listeners and the handler chain.
///
/// Every request that can be attributed to a client gets exactly one
/// response, falling back to an error response when the chain did not write.
/// Raw UDP datagrams go through [`DnsServerHandler::handle_udp`]; TCP is
/// served by `hickory_server::ServerFuture` through [`RequestHandler`].
#[derive(Clone)]
pub struct DnsServerHandler {
    chain: Arc<dyn DnsHandler>,
}

impl DnsServerHandler {
    pub fn new(chain: Arc<dyn DnsHandler>) -> Self {
        Self { chain }
    }

    /// Handle one UDP datagram, returning the datagram to send back.
    pub async fn handle_udp(&self, bytes: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match Message::from_vec(bytes) {
            Ok(message) => message,
            Err(e) => {
                warn!(client = %client, error = %e, "Failed to parse request");
                let response = MessageBuilder::build_format_error(bytes)?;
                return Self::encode(&response);
            }
        };

        if request.message_type() != MessageType::Query {
            debug!(client = %client, "Dropping response received on listener");
            return None;
        }

        let response = self.handle(&request, client).await;
        Self::encode(&Self::fit_udp(&request, response))
    }

    /// Run `request` through the chain and return what should go back to the client.
    pub async fn handle(&self, request: &Message, client: SocketAddr) -> Message {
        if let Some(question) = request.queries().first() {
            debug!(
                client = %client,
                name = %question.name(),
                record_type = ?question.query_type(),
                "DNS query received"
            );
        }

        let mut writer = CaptureWriter::for_remote(Some(client));

        match self.chain.serve_dns(request, &mut writer).await {
            Ok(code) if client_wrote(code) => match writer.into_message() {
                Some(response) => response,
                None => {
                    warn!(handler = self.chain.name(), "Handler chain wrote no response");
                    MessageBuilder::build_error_response(request, ResponseCode::ServFail)
                }
            },
            Ok(code) => {
                debug!(code = ?code, "Sending error response");
                MessageBuilder::build_error_response(request, code)
            }
            Err(e) => {
                error!(error = %e, "Query resolution failed");
                MessageBuilder::build_error_response(request, ResponseCode::ServFail)
            }
        }
    }

    /// Chain-side view of a request accepted by the hickory server.
    fn request_message(request: &Request, query: &Query) -> Message {
        let header = request.header();
        let mut message = Message::new(header.id(), MessageType::Query, header.op_code());
        message.set_recursion_desired(header.recursion_desired());
        message.set_checking_disabled(header.checking_disabled());
        message.add_query(query.clone());
        message
    }

    fn fit_udp(request: &Message, response: Message) -> Message {
        let limit = usize::from(request.max_payload().max(512));

        match MessageBuilder::serialize_message(&response) {
            Ok(bytes) if bytes.len() > limit => {
                debug!(size = bytes.len(), limit, "Response truncated for UDP");
                MessageBuilder::build_truncated(&response)
            }
            _ => response,
        }
    }

    fn encode(response: &Message) -> Option<Vec<u8>> {
        match MessageBuilder::serialize_message(response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(error = %e, "Failed to send response");
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                let mut header = *request.header();
                header.set_message_type(MessageType::Response);
                header.set_response_code(ResponseCode::FormErr);
                let response = MessageResponseBuilder::from_message_request(request).build(
                    header,
                    &[],
                    &[] as &[Record],
                    &[],
                    &[],
                );
                return match response_handle.send_response(response).await {
                    Ok(info) => info,
                    Err(e) => {
                        error!(error = %e, "Failed to send error response");
                        ResponseInfo::from(*request.header())
                    }
                };
            }
        };

        let message = Self::request_message(request, request_info.query.original());
        let reply = self.handle(&message, request.src()).await;

        let header = *reply.header();
        let response = MessageResponseBuilder::from_message_request(request).build(
            header,
            reply.answers().iter(),
            reply.name_servers().iter(),
            &[],
            reply.additionals().iter(),
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}
