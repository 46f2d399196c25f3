/// A region is always carried as a record; bare names get an empty location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Region {
    pub name: String,
    pub location: String,
}

impl Region {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

impl From<&str> for Region {
    fn from(name: &str) -> Self {
        Self::new(name, "")
    }
}

impl From<String> for Region {
    fn from(name: String) -> Self {
        Self::new(name, "")
    }
}
