use crate::errors::DomainError;

/// Key under which a name advertises its SCION address in a TXT record.
pub const SCION_ATTRIBUTE_KEY: &str = "scion";

/// `key=value` pair carried in a TXT record string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Attribute<'a> {
    /// Splits on the first `=`; everything after it belongs to the value.
    pub fn parse(text: &'a str) -> Result<Self, DomainError> {
        text.split_once('=')
            .map(|(key, value)| Attribute { key, value })
            .ok_or_else(|| DomainError::InvalidAttribute(format!("missing '=' in '{}'", text)))
    }

    pub fn is_scion(&self) -> bool {
        self.key == SCION_ATTRIBUTE_KEY
    }
}
