//! Resource and data source models
//!
//! Models are the typed form of the attribute trees exchanged with the host
//! runtime. Every field is a tri-state [`tfplug::Value`].

/// Declares an object model together with its decode, encode and type impls.
///
/// Each field maps to one attribute name and its declared attribute type.
macro_rules! object_model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $ty:ty => $attr:literal: $kind:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(pub $field: $ty),+
        }

        impl tfplug::value::FromDynamic for $name {
            fn from_dynamic(
                value: &tfplug::types::Dynamic,
                path: &tfplug::types::AttributePath,
            ) -> ::std::result::Result<Self, tfplug::types::Diagnostics> {
                let mut reader = tfplug::value::ObjectReader::new(value, path)?;
                let model = Self {
                    $($field: reader.get($attr)),+
                };
                reader.finish(model)
            }
        }

        impl tfplug::value::ToDynamic for $name {
            fn to_dynamic(&self) -> tfplug::types::Dynamic {
                tfplug::value::ObjectWriter::new()
                    $(.set($attr, &self.$field))+
                    .build()
            }
        }

        impl tfplug::value::ObjectType for $name {
            fn attribute_types(
            ) -> std::collections::HashMap<String, tfplug::schema::AttributeType> {
                #[allow(unused_imports)]
                use tfplug::schema::AttributeType;
                #[allow(unused_imports)]
                use tfplug::value::ObjectType as _;

                std::collections::HashMap::from([
                    $(($attr.to_string(), $kind)),+
                ])
            }
        }
    };
}

pub mod dedicated_server;
pub mod public_cloud;
