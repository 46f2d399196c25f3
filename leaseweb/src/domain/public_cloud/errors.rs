use thiserror::Error;

/// Invariant violations raised while building domain values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("cannot find {enum_name} for value \"{value}\"")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },

    #[error("\"{0}\" is not a valid ssh key")]
    InvalidSshKey(String),

    #[error("root disk size {value} is out of range, it must be between {min} and {max}")]
    RootDiskSizeOutOfRange { value: i64, min: i64, max: i64 },

    #[error("reference is {length} characters long, it cannot be longer than {max}")]
    ReferenceTooLong { length: usize, max: usize },

    #[error("\"{0}\" is not a valid uuid")]
    InvalidUuid(String),

    #[error("contract.term cannot be 0 when contract.type is \"MONTHLY\"")]
    ContractTermCannotBeZero,

    #[error("contract.term must be 0 when contract.type is \"HOURLY\"")]
    ContractTermMustBeZero,

    #[error("instance type \"{instance_type}\" is not allowed, allowed types are {allowed:?}")]
    InvalidInstanceType {
        instance_type: String,
        allowed: Vec<String>,
    },
}
