use super::enums::Method;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthCheck {
    pub method: Method,
    pub uri: String,
    pub port: i64,
    pub host: Option<String>,
}
