//! Model of the `leaseweb_public_cloud_instances` data source
//!
//! Mirrors the full instance details returned by the API, including the
//! auto scaling group and its load balancer.

use tfplug::Value;

object_model! {
    pub struct CpuModel {
        value: Value<i64> => "value": AttributeType::Number,
        unit: Value<String> => "unit": AttributeType::String,
    }
}

object_model! {
    pub struct MemoryModel {
        value: Value<f64> => "value": AttributeType::Number,
        unit: Value<String> => "unit": AttributeType::String,
    }
}

object_model! {
    pub struct NetworkSpeedModel {
        value: Value<i64> => "value": AttributeType::Number,
        unit: Value<String> => "unit": AttributeType::String,
    }
}

object_model! {
    pub struct ResourcesModel {
        cpu: Value<CpuModel> => "cpu": CpuModel::object_type(),
        memory: Value<MemoryModel> => "memory": MemoryModel::object_type(),
        public_network_speed: Value<NetworkSpeedModel> => "public_network_speed": NetworkSpeedModel::object_type(),
        private_network_speed: Value<NetworkSpeedModel> => "private_network_speed": NetworkSpeedModel::object_type(),
    }
}

object_model! {
    pub struct StorageSizeModel {
        size: Value<f64> => "size": AttributeType::Number,
        unit: Value<String> => "unit": AttributeType::String,
    }
}

object_model! {
    pub struct ImageModel {
        id: Value<String> => "id": AttributeType::String,
        name: Value<String> => "name": AttributeType::String,
        version: Value<String> => "version": AttributeType::String,
        family: Value<String> => "family": AttributeType::String,
        flavour: Value<String> => "flavour": AttributeType::String,
        architecture: Value<String> => "architecture": AttributeType::String,
        state: Value<String> => "state": AttributeType::String,
        state_reason: Value<String> => "state_reason": AttributeType::String,
        region: Value<String> => "region": AttributeType::String,
        created_at: Value<String> => "created_at": AttributeType::String,
        updated_at: Value<String> => "updated_at": AttributeType::String,
        custom: Value<bool> => "custom": AttributeType::Bool,
        storage_size: Value<StorageSizeModel> => "storage_size": StorageSizeModel::object_type(),
        market_apps: Value<Vec<String>> => "market_apps": AttributeType::list_of(AttributeType::String),
        storage_types: Value<Vec<String>> => "storage_types": AttributeType::list_of(AttributeType::String),
    }
}

object_model! {
    pub struct ContractModel {
        billing_frequency: Value<i64> => "billing_frequency": AttributeType::Number,
        term: Value<i64> => "term": AttributeType::Number,
        contract_type: Value<String> => "type": AttributeType::String,
        ends_at: Value<String> => "ends_at": AttributeType::String,
        renewals_at: Value<String> => "renewals_at": AttributeType::String,
        created_at: Value<String> => "created_at": AttributeType::String,
        state: Value<String> => "state": AttributeType::String,
    }
}

object_model! {
    pub struct DdosModel {
        detection_profile: Value<String> => "detection_profile": AttributeType::String,
        protection_type: Value<String> => "protection_type": AttributeType::String,
    }
}

object_model! {
    pub struct IpModel {
        ip: Value<String> => "ip": AttributeType::String,
        prefix_length: Value<String> => "prefix_length": AttributeType::String,
        version: Value<i64> => "version": AttributeType::Number,
        null_routed: Value<bool> => "null_routed": AttributeType::Bool,
        main_ip: Value<bool> => "main_ip": AttributeType::Bool,
        network_type: Value<String> => "network_type": AttributeType::String,
        reverse_lookup: Value<String> => "reverse_lookup": AttributeType::String,
        ddos: Value<DdosModel> => "ddos": DdosModel::object_type(),
    }
}

object_model! {
    pub struct IsoModel {
        id: Value<String> => "id": AttributeType::String,
        name: Value<String> => "name": AttributeType::String,
    }
}

object_model! {
    pub struct PrivateNetworkModel {
        id: Value<String> => "id": AttributeType::String,
        status: Value<String> => "status": AttributeType::String,
        subnet: Value<String> => "subnet": AttributeType::String,
    }
}

object_model! {
    pub struct VolumeModel {
        size: Value<f64> => "size": AttributeType::Number,
        unit: Value<String> => "unit": AttributeType::String,
    }
}

object_model! {
    pub struct StickySessionModel {
        enabled: Value<bool> => "enabled": AttributeType::Bool,
        max_life_time: Value<i64> => "max_life_time": AttributeType::Number,
    }
}

object_model! {
    pub struct HealthCheckModel {
        method: Value<String> => "method": AttributeType::String,
        uri: Value<String> => "uri": AttributeType::String,
        host: Value<String> => "host": AttributeType::String,
        port: Value<i64> => "port": AttributeType::Number,
    }
}

object_model! {
    pub struct LoadBalancerConfigurationModel {
        balance: Value<String> => "balance": AttributeType::String,
        x_forwarded_for: Value<bool> => "x_forwarded_for": AttributeType::Bool,
        idle_timeout: Value<i64> => "idle_timeout": AttributeType::Number,
        target_port: Value<i64> => "target_port": AttributeType::Number,
        sticky_session: Value<StickySessionModel> => "sticky_session": StickySessionModel::object_type(),
        health_check: Value<HealthCheckModel> => "health_check": HealthCheckModel::object_type(),
    }
}

object_model! {
    pub struct LoadBalancerModel {
        id: Value<String> => "id": AttributeType::String,
        load_balancer_type: Value<String> => "type": AttributeType::String,
        resources: Value<ResourcesModel> => "resources": ResourcesModel::object_type(),
        region: Value<String> => "region": AttributeType::String,
        reference: Value<String> => "reference": AttributeType::String,
        state: Value<String> => "state": AttributeType::String,
        contract: Value<ContractModel> => "contract": ContractModel::object_type(),
        started_at: Value<String> => "started_at": AttributeType::String,
        ips: Value<Vec<IpModel>> => "ips": AttributeType::list_of(IpModel::object_type()),
        private_network: Value<PrivateNetworkModel> => "private_network": PrivateNetworkModel::object_type(),
        configuration: Value<LoadBalancerConfigurationModel> => "configuration": LoadBalancerConfigurationModel::object_type(),
    }
}

object_model! {
    pub struct AutoScalingGroupModel {
        id: Value<String> => "id": AttributeType::String,
        auto_scaling_group_type: Value<String> => "type": AttributeType::String,
        state: Value<String> => "state": AttributeType::String,
        region: Value<String> => "region": AttributeType::String,
        reference: Value<String> => "reference": AttributeType::String,
        created_at: Value<String> => "created_at": AttributeType::String,
        updated_at: Value<String> => "updated_at": AttributeType::String,
        desired_amount: Value<i64> => "desired_amount": AttributeType::Number,
        starts_at: Value<String> => "starts_at": AttributeType::String,
        ends_at: Value<String> => "ends_at": AttributeType::String,
        minimum_amount: Value<i64> => "minimum_amount": AttributeType::Number,
        maximum_amount: Value<i64> => "maximum_amount": AttributeType::Number,
        cpu_threshold: Value<i64> => "cpu_threshold": AttributeType::Number,
        warmup_time: Value<i64> => "warmup_time": AttributeType::Number,
        cooldown_time: Value<i64> => "cooldown_time": AttributeType::Number,
        load_balancer: Value<LoadBalancerModel> => "load_balancer": LoadBalancerModel::object_type(),
    }
}

object_model! {
    pub struct InstanceModel {
        id: Value<String> => "id": AttributeType::String,
        region: Value<String> => "region": AttributeType::String,
        reference: Value<String> => "reference": AttributeType::String,
        resources: Value<ResourcesModel> => "resources": ResourcesModel::object_type(),
        image: Value<ImageModel> => "image": ImageModel::object_type(),
        state: Value<String> => "state": AttributeType::String,
        instance_type: Value<String> => "type": AttributeType::String,
        root_disk_size: Value<i64> => "root_disk_size": AttributeType::Number,
        root_disk_storage_type: Value<String> => "root_disk_storage_type": AttributeType::String,
        ips: Value<Vec<IpModel>> => "ips": AttributeType::list_of(IpModel::object_type()),
        started_at: Value<String> => "started_at": AttributeType::String,
        contract: Value<ContractModel> => "contract": ContractModel::object_type(),
        market_app_id: Value<String> => "market_app_id": AttributeType::String,
        iso: Value<IsoModel> => "iso": IsoModel::object_type(),
        private_network: Value<PrivateNetworkModel> => "private_network": PrivateNetworkModel::object_type(),
        auto_scaling_group: Value<AutoScalingGroupModel> => "auto_scaling_group": AutoScalingGroupModel::object_type(),
        volume: Value<VolumeModel> => "volume": VolumeModel::object_type(),
    }
}

object_model! {
    pub struct InstancesDataSourceModel {
        instances: Value<Vec<InstanceModel>> => "instances": AttributeType::list_of(InstanceModel::object_type()),
    }
}
