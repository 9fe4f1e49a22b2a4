//! scitra-dns domain layer: SCION addresses, their IPv6 translation and
//! configuration.
pub mod attribute;
pub mod config;
pub mod encoded_address;
pub mod errors;
pub mod scion_address;
pub mod translation_prefix;

pub use attribute::{Attribute, SCION_ATTRIBUTE_KEY};
pub use config::{CliOverrides, Config, ConfigError};
pub use encoded_address::{AddressCodec, EncodedAddress, LocalPrefix};
pub use errors::DomainError;
pub use scion_address::{Asn, HostAddr, Isd, IsdAsn, ScionAddr, ServiceAddr};
pub use translation_prefix::{TranslationPrefix, DEFAULT_TRANSLATION_PREFIX};
