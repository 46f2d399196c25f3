use crate::domain::public_cloud::DomainError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoScalingGroupReference(String);

impl AutoScalingGroupReference {
    pub const MAX_LENGTH: usize = 255;

    pub fn new(value: &str) -> Result<Self, DomainError> {
        let length = value.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(DomainError::ReferenceTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AutoScalingGroupReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
