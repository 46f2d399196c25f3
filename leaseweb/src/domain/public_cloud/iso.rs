#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Iso {
    pub id: String,
    pub name: String,
}
