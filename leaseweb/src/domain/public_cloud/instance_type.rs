use super::enums::StorageType;
use super::{Prices, Resources};

/// An instance type as offered in a region
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceTypeDetails {
    pub name: String,
    pub resources: Resources,
    pub prices: Prices,
    pub storage_types: Vec<StorageType>,
}
