use super::enums::{ImageId, StorageType};
use super::{Region, StorageSize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: ImageId,
    pub name: String,
    pub family: String,
    pub flavour: String,
    pub custom: bool,
    pub version: Option<String>,
    pub architecture: Option<String>,
    pub state: Option<String>,
    pub state_reason: Option<String>,
    pub region: Option<Region>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub storage_size: Option<StorageSize>,
    pub market_apps: Vec<String>,
    pub storage_types: Vec<StorageType>,
}

#[derive(Debug, Clone, Default)]
pub struct OptionalImageValues {
    pub version: Option<String>,
    pub architecture: Option<String>,
    pub state: Option<String>,
    pub state_reason: Option<String>,
    pub region: Option<Region>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub storage_size: Option<StorageSize>,
    pub market_apps: Vec<String>,
    pub storage_types: Vec<StorageType>,
}

impl Image {
    pub fn new(
        id: ImageId,
        name: impl Into<String>,
        family: impl Into<String>,
        flavour: impl Into<String>,
        custom: bool,
        optional: OptionalImageValues,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            family: family.into(),
            flavour: flavour.into(),
            custom,
            version: optional.version,
            architecture: optional.architecture,
            state: optional.state,
            state_reason: optional.state_reason,
            region: optional.region,
            created_at: optional.created_at,
            updated_at: optional.updated_at,
            storage_size: optional.storage_size,
            market_apps: optional.market_apps,
            storage_types: optional.storage_types,
        }
    }
}
