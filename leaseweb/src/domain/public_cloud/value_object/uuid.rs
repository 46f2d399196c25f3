use crate::domain::public_cloud::DomainError;
use std::fmt;

/// Identifier in canonical 8-4-4-4-12 form with lowercase hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid(uuid::Uuid);

impl Uuid {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let is_canonical = value.len() == 36
            && value
                .char_indices()
                .all(|(i, c)| matches!(i, 8 | 13 | 18 | 23) == (c == '-'))
            && !value.bytes().any(|b| b.is_ascii_uppercase());
        if !is_canonical {
            return Err(DomainError::InvalidUuid(value.to_string()));
        }

        uuid::Uuid::try_parse(value)
            .map(Self)
            .map_err(|_| DomainError::InvalidUuid(value.to_string()))
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
