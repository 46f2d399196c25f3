//! Model of the `leaseweb_public_cloud_instance` resource

use tfplug::Value;

object_model! {
    pub struct ImageResourceModel {
        id: Value<String> => "id": AttributeType::String,
        name: Value<String> => "name": AttributeType::String,
        family: Value<String> => "family": AttributeType::String,
        flavour: Value<String> => "flavour": AttributeType::String,
        custom: Value<bool> => "custom": AttributeType::Bool,
    }
}

object_model! {
    pub struct ContractResourceModel {
        billing_frequency: Value<i64> => "billing_frequency": AttributeType::Number,
        term: Value<i64> => "term": AttributeType::Number,
        contract_type: Value<String> => "type": AttributeType::String,
        ends_at: Value<String> => "ends_at": AttributeType::String,
        state: Value<String> => "state": AttributeType::String,
    }
}

object_model! {
    pub struct IpResourceModel {
        ip: Value<String> => "ip": AttributeType::String,
    }
}

object_model! {
    pub struct InstanceResourceModel {
        id: Value<String> => "id": AttributeType::String,
        region: Value<String> => "region": AttributeType::String,
        reference: Value<String> => "reference": AttributeType::String,
        image: Value<ImageResourceModel> => "image": ImageResourceModel::object_type(),
        state: Value<String> => "state": AttributeType::String,
        instance_type: Value<String> => "type": AttributeType::String,
        root_disk_size: Value<i64> => "root_disk_size": AttributeType::Number,
        root_disk_storage_type: Value<String> => "root_disk_storage_type": AttributeType::String,
        ips: Value<Vec<IpResourceModel>> => "ips": AttributeType::list_of(IpResourceModel::object_type()),
        started_at: Value<String> => "started_at": AttributeType::String,
        contract: Value<ContractResourceModel> => "contract": ContractResourceModel::object_type(),
        market_app_id: Value<String> => "market_app_id": AttributeType::String,
        ssh_key: Value<String> => "ssh_key": AttributeType::String,
    }
}
