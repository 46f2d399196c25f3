#[derive(Debug, Clone, PartialEq, Default)]
pub struct Volume {
    pub size: f64,
    pub unit: String,
}
