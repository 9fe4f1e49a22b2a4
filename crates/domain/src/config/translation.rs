use crate::translation_prefix::{TranslationPrefix, DEFAULT_TRANSLATION_PREFIX};
use crate::DomainError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslationConfig {
    /// IPv6 /8 block translated addresses are synthesized under.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// TTL of synthesized AAAA records.
    #[serde(default)]
    pub ttl: u32,
}

impl TranslationConfig {
    pub fn translation_prefix(&self) -> Result<TranslationPrefix, DomainError> {
        self.prefix.parse()
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            ttl: 0,
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_TRANSLATION_PREFIX.to_string()
}
