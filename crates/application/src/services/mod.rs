pub mod capture_writer;
pub mod handler_chain;
pub mod response_synthesizer;

pub use capture_writer::CaptureWriter;
pub use handler_chain::{client_wrote, next_or_failure};
pub use response_synthesizer::ResponseSynthesizer;
