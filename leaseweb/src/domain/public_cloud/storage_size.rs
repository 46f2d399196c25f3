#[derive(Debug, Clone, PartialEq, Default)]
pub struct StorageSize {
    pub size: f64,
    pub unit: String,
}
