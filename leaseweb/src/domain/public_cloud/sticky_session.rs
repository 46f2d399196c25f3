#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StickySession {
    pub enabled: bool,
    pub max_life_time: i64,
}
