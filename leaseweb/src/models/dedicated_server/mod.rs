//! Models of the dedicated server resource and data source

use tfplug::Value;

object_model! {
    pub struct LocationModel {
        rack: Value<String> => "rack": AttributeType::String,
        site: Value<String> => "site": AttributeType::String,
        suite: Value<String> => "suite": AttributeType::String,
        unit: Value<String> => "unit": AttributeType::String,
    }
}

object_model! {
    pub struct DedicatedServerResourceModel {
        id: Value<String> => "id": AttributeType::String,
        reference: Value<String> => "reference": AttributeType::String,
        reverse_lookup: Value<String> => "reverse_lookup": AttributeType::String,
        dhcp_lease: Value<String> => "dhcp_lease": AttributeType::String,
        powered_on: Value<bool> => "powered_on": AttributeType::Bool,
        public_network_interface_opened: Value<bool> => "public_network_interface_opened": AttributeType::Bool,
        public_ip_null_routed: Value<bool> => "public_ip_null_routed": AttributeType::Bool,
        public_ip: Value<String> => "public_ip": AttributeType::String,
        remote_management_ip: Value<String> => "remote_management_ip": AttributeType::String,
        internal_mac: Value<String> => "internal_mac": AttributeType::String,
        location: Value<LocationModel> => "location": LocationModel::object_type(),
    }
}

object_model! {
    pub struct DedicatedServersDataSourceModel {
        reference: Value<String> => "reference": AttributeType::String,
        site: Value<String> => "site": AttributeType::String,
        ids: Value<Vec<String>> => "ids": AttributeType::list_of(AttributeType::String),
    }
}
