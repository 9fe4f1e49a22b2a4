#![allow(dead_code)]
mod mock_handlers;

pub use mock_handlers::{query, MockNextHandler, MOCK_A, MOCK_AAAA};
