//! scitra-dns application layer: the handler chain contract and the SCION
//! translating handler built on it.
pub mod ports;
pub mod services;
pub mod use_cases;
