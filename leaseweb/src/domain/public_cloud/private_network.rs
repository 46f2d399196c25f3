#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrivateNetwork {
    pub id: String,
    pub status: String,
    pub subnet: String,
}
