//! Domain entities to the instances data source model

use super::{check_model, format_time, AdapterError};
use crate::domain::public_cloud::{
    AutoScalingGroup, Contract, HealthCheck, Image, Instance, Ip, Iso, LoadBalancer,
    LoadBalancerConfiguration, PrivateNetwork, Resources, StickySession, StorageSize, Volume,
};
use crate::models::public_cloud::{
    AutoScalingGroupModel, ContractModel, CpuModel, DdosModel, HealthCheckModel, ImageModel,
    InstanceModel, InstancesDataSourceModel, IpModel, IsoModel, LoadBalancerConfigurationModel,
    LoadBalancerModel, MemoryModel, NetworkSpeedModel, PrivateNetworkModel, ResourcesModel,
    StickySessionModel, StorageSizeModel, VolumeModel,
};
use tfplug::Value;

pub fn adapt_instances(instances: &[Instance]) -> Result<InstancesDataSourceModel, AdapterError> {
    let model = InstancesDataSourceModel {
        instances: Value::known(instances.iter().map(adapt_instance).collect()),
    };

    check_model("adapt_instances", model)
}

fn adapt_instance(instance: &Instance) -> InstanceModel {
    InstanceModel {
        id: Value::known(instance.id.to_string()),
        region: Value::known(instance.region.name.clone()),
        reference: Value::from_option(instance.reference.clone()),
        resources: Value::from_option(instance.resources.as_ref().map(adapt_resources)),
        image: Value::known(adapt_image(&instance.image)),
        state: Value::known(instance.state.to_string()),
        instance_type: Value::known(instance.instance_type.to_string()),
        root_disk_size: Value::from_option(instance.root_disk_size.map(|size| size.value())),
        root_disk_storage_type: Value::known(instance.root_disk_storage_type.to_string()),
        ips: Value::known(instance.ips.iter().map(adapt_ip).collect()),
        started_at: format_time(instance.started_at.as_ref()),
        contract: Value::known(adapt_contract(&instance.contract)),
        market_app_id: Value::from_option(instance.market_app_id.clone()),
        iso: Value::from_option(instance.iso.as_ref().map(adapt_iso)),
        private_network: Value::from_option(
            instance.private_network.as_ref().map(adapt_private_network),
        ),
        auto_scaling_group: Value::from_option(
            instance
                .auto_scaling_group
                .as_ref()
                .map(adapt_auto_scaling_group),
        ),
        volume: Value::from_option(instance.volume.as_ref().map(adapt_volume)),
    }
}

fn adapt_resources(resources: &Resources) -> ResourcesModel {
    ResourcesModel {
        cpu: Value::known(CpuModel {
            value: Value::known(resources.cpu.value),
            unit: Value::known(resources.cpu.unit.clone()),
        }),
        memory: Value::known(MemoryModel {
            value: Value::known(resources.memory.value),
            unit: Value::known(resources.memory.unit.clone()),
        }),
        public_network_speed: Value::known(NetworkSpeedModel {
            value: Value::known(resources.public_network_speed.value),
            unit: Value::known(resources.public_network_speed.unit.clone()),
        }),
        private_network_speed: Value::known(NetworkSpeedModel {
            value: Value::known(resources.private_network_speed.value),
            unit: Value::known(resources.private_network_speed.unit.clone()),
        }),
    }
}

fn adapt_image(image: &Image) -> ImageModel {
    ImageModel {
        id: Value::known(image.id.to_string()),
        name: Value::known(image.name.clone()),
        version: Value::from_option(image.version.clone()),
        family: Value::known(image.family.clone()),
        flavour: Value::known(image.flavour.clone()),
        architecture: Value::from_option(image.architecture.clone()),
        state: Value::from_option(image.state.clone()),
        state_reason: Value::from_option(image.state_reason.clone()),
        region: Value::from_option(image.region.as_ref().map(|r| r.name.clone())),
        created_at: format_time(image.created_at.as_ref()),
        updated_at: format_time(image.updated_at.as_ref()),
        custom: Value::known(image.custom),
        storage_size: Value::from_option(image.storage_size.as_ref().map(adapt_storage_size)),
        market_apps: Value::known(image.market_apps.clone()),
        storage_types: Value::known(
            image
                .storage_types
                .iter()
                .map(|storage_type| storage_type.to_string())
                .collect(),
        ),
    }
}

fn adapt_storage_size(size: &StorageSize) -> StorageSizeModel {
    StorageSizeModel {
        size: Value::known(size.size),
        unit: Value::known(size.unit.clone()),
    }
}

fn adapt_contract(contract: &Contract) -> ContractModel {
    ContractModel {
        billing_frequency: Value::known(contract.billing_frequency.value()),
        term: Value::known(contract.term.value()),
        contract_type: Value::known(contract.contract_type.to_string()),
        ends_at: format_time(contract.ends_at.as_ref()),
        renewals_at: format_time(contract.renewals_at.as_ref()),
        created_at: format_time(contract.created_at.as_ref()),
        state: Value::known(contract.state.to_string()),
    }
}

fn adapt_ip(ip: &Ip) -> IpModel {
    IpModel {
        ip: Value::known(ip.ip.clone()),
        prefix_length: Value::known(ip.prefix_length.clone()),
        version: Value::known(ip.version),
        null_routed: Value::known(ip.null_routed),
        main_ip: Value::known(ip.main_ip),
        network_type: Value::known(ip.network_type.to_string()),
        reverse_lookup: Value::from_option(ip.reverse_lookup.clone()),
        ddos: Value::from_option(ip.ddos.as_ref().map(|ddos| DdosModel {
            detection_profile: Value::known(ddos.detection_profile.clone()),
            protection_type: Value::known(ddos.protection_type.clone()),
        })),
    }
}

fn adapt_iso(iso: &Iso) -> IsoModel {
    IsoModel {
        id: Value::known(iso.id.clone()),
        name: Value::known(iso.name.clone()),
    }
}

fn adapt_private_network(private_network: &PrivateNetwork) -> PrivateNetworkModel {
    PrivateNetworkModel {
        id: Value::known(private_network.id.clone()),
        status: Value::known(private_network.status.clone()),
        subnet: Value::known(private_network.subnet.clone()),
    }
}

fn adapt_volume(volume: &Volume) -> VolumeModel {
    VolumeModel {
        size: Value::known(volume.size),
        unit: Value::known(volume.unit.clone()),
    }
}

fn adapt_auto_scaling_group(group: &AutoScalingGroup) -> AutoScalingGroupModel {
    AutoScalingGroupModel {
        id: Value::known(group.id.to_string()),
        auto_scaling_group_type: Value::known(group.auto_scaling_group_type.to_string()),
        state: Value::known(group.state.to_string()),
        region: Value::known(group.region.name.clone()),
        reference: Value::known(group.reference.to_string()),
        created_at: format_time(Some(&group.created_at)),
        updated_at: format_time(Some(&group.updated_at)),
        desired_amount: Value::from_option(group.desired_amount),
        starts_at: format_time(group.starts_at.as_ref()),
        ends_at: format_time(group.ends_at.as_ref()),
        minimum_amount: Value::from_option(group.minimum_amount),
        maximum_amount: Value::from_option(group.maximum_amount),
        cpu_threshold: Value::from_option(group.cpu_threshold),
        warmup_time: Value::from_option(group.warmup_time),
        cooldown_time: Value::from_option(group.cooldown_time),
        load_balancer: Value::from_option(group.load_balancer.as_ref().map(adapt_load_balancer)),
    }
}

fn adapt_load_balancer(load_balancer: &LoadBalancer) -> LoadBalancerModel {
    LoadBalancerModel {
        id: Value::known(load_balancer.id.to_string()),
        load_balancer_type: Value::known(load_balancer.load_balancer_type.to_string()),
        resources: Value::known(adapt_resources(&load_balancer.resources)),
        region: Value::known(load_balancer.region.name.clone()),
        reference: Value::from_option(load_balancer.reference.clone()),
        state: Value::known(load_balancer.state.to_string()),
        contract: Value::known(adapt_contract(&load_balancer.contract)),
        started_at: format_time(load_balancer.started_at.as_ref()),
        ips: Value::known(load_balancer.ips.iter().map(adapt_ip).collect()),
        private_network: Value::from_option(
            load_balancer
                .private_network
                .as_ref()
                .map(adapt_private_network),
        ),
        configuration: Value::from_option(
            load_balancer
                .configuration
                .as_ref()
                .map(adapt_load_balancer_configuration),
        ),
    }
}

fn adapt_load_balancer_configuration(
    configuration: &LoadBalancerConfiguration,
) -> LoadBalancerConfigurationModel {
    LoadBalancerConfigurationModel {
        balance: Value::known(configuration.balance.to_string()),
        x_forwarded_for: Value::known(configuration.x_forwarded_for),
        idle_timeout: Value::known(configuration.idle_timeout),
        target_port: Value::known(configuration.target_port),
        sticky_session: Value::from_option(
            configuration.sticky_session.as_ref().map(adapt_sticky_session),
        ),
        health_check: Value::from_option(
            configuration.health_check.as_ref().map(adapt_health_check),
        ),
    }
}

fn adapt_sticky_session(sticky_session: &StickySession) -> StickySessionModel {
    StickySessionModel {
        enabled: Value::known(sticky_session.enabled),
        max_life_time: Value::known(sticky_session.max_life_time),
    }
}

fn adapt_health_check(health_check: &HealthCheck) -> HealthCheckModel {
    HealthCheckModel {
        method: Value::known(health_check.method.to_string()),
        uri: Value::known(health_check.uri.clone()),
        host: Value::from_option(health_check.host.clone()),
        port: Value::known(health_check.port),
    }
}
