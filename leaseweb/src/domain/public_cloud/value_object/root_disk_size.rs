use crate::domain::public_cloud::DomainError;

/// Root disk size in GiB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootDiskSize(i64);

impl RootDiskSize {
    pub const MIN: i64 = 5;
    pub const MAX: i64 = 1000;

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::RootDiskSizeOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
