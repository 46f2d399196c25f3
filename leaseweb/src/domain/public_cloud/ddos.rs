#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ddos {
    pub detection_profile: String,
    pub protection_type: String,
}
