//! Closed token sets
//!
//! Every enum parses from and renders to its wire token. Parsing never falls
//! back to a default variant: an unrecognised token is a [`DomainError`].
//!
//! [`DomainError`]: crate::domain::public_cloud::DomainError

/// Enum over string tokens with `parse`, `as_str` and `ALL`
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }

            pub fn parse(value: &str) -> Result<Self, $crate::domain::public_cloud::DomainError> {
                match value {
                    $($token => Ok($name::$variant),)+
                    other => Err($crate::domain::public_cloud::DomainError::UnknownEnumValue {
                        enum_name: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }

            pub fn values() -> Vec<String> {
                Self::ALL.iter().map(|v| v.as_str().to_string()).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::public_cloud::DomainError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse(value)
            }
        }
    };
}

/// Enum over integer tokens with `parse`, `value` and `ALL`
macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn value(&self) -> i64 {
                match self {
                    $($name::$variant => $token),+
                }
            }

            pub fn parse(value: i64) -> Result<Self, $crate::domain::public_cloud::DomainError> {
                match value {
                    $($token => Ok($name::$variant),)+
                    other => Err($crate::domain::public_cloud::DomainError::UnknownEnumValue {
                        enum_name: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }

            pub fn values() -> Vec<i64> {
                Self::ALL.iter().map(|v| v.value()).collect()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value())
            }
        }
    };
}

mod auto_scaling_group;
mod contract;
mod image_id;
mod instance;
mod instance_type;
mod load_balancer;

pub use auto_scaling_group::{AutoScalingGroupState, AutoScalingGroupType};
pub use contract::{ContractBillingFrequency, ContractState, ContractTerm, ContractType};
pub use image_id::ImageId;
pub use instance::{NetworkType, RootDiskStorageType, State, StorageType};
pub use instance_type::InstanceType;
pub use load_balancer::{Balance, Method};
