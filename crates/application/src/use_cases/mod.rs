pub mod resolve_metadata;
pub mod translate_query;

pub use resolve_metadata::{MetadataResolver, METADATA_QUERY_ID};
pub use translate_query::{Decision, ScionTranslator};
