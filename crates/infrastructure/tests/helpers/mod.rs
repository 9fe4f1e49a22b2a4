#![allow(dead_code)]
pub mod chain_handlers;
pub mod dns_server_mock;

pub use chain_handlers::{query, FailingHandler, SilentHandler, StaticHandler};
pub use dns_server_mock::{MockDnsServer, MockMode, MOCK_ANSWER};
