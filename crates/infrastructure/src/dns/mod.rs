pub mod forward_handler;
pub mod forwarding;
pub mod server;
pub mod transport;

pub use forward_handler::ForwardHandler;
pub use forwarding::{DnsForwarder, DnsResponse, MessageBuilder, ResponseParser};
pub use server::DnsServerHandler;
