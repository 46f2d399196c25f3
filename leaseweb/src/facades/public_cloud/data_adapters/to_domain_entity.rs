//! Wire records to domain entities

use super::{domain_err, field_err, nested_err, AdapterError};
use crate::api::public_cloud as sdk;
use crate::domain::public_cloud::enums::{
    AutoScalingGroupState, AutoScalingGroupType, Balance, ContractBillingFrequency,
    ContractState, ContractTerm, ContractType, ImageId, InstanceType, Method, NetworkType, State,
    StorageType,
};
use crate::domain::public_cloud::value_object::{AutoScalingGroupReference, RootDiskSize, Uuid};
use crate::domain::public_cloud::{
    AutoScalingGroup, Contract, Cpu, Ddos, HealthCheck, Image, Instance, InstanceTypeDetails, Ip,
    Iso, LoadBalancer, LoadBalancerConfiguration, Memory, NetworkSpeed, OptionalAutoScalingGroupValues,
    OptionalImageValues, OptionalInstanceValues, OptionalIpValues, OptionalLoadBalancerConfigurationValues,
    OptionalLoadBalancerValues, Price, Prices, PrivateNetwork, Region, Resources, StickySession,
    Storage, StorageSize, Volume,
};

/// Adapts the single instance variant, which carries ISO, private network and volume
pub fn adapt_instance_details(instance: &sdk::InstanceDetails) -> Result<Instance, AdapterError> {
    const FUNCTION: &str = "adapt_instance_details";

    let ips = instance
        .ips
        .iter()
        .map(adapt_ip_details)
        .collect::<Result<Vec<_>, _>>()
        .map_err(nested_err(FUNCTION))?;

    let mut optional = adapt_optional_instance_values(
        FUNCTION,
        instance.root_disk_size,
        instance.reference.as_deref(),
        instance.market_app_id.as_deref(),
        &instance.resources,
        instance.started_at,
        instance.auto_scaling_group.as_ref(),
    )?;
    optional.iso = instance.iso.as_ref().map(adapt_iso);
    optional.private_network = instance.private_network.as_ref().map(adapt_private_network);
    optional.volume = instance.volume.as_ref().map(adapt_volume);

    adapt_required_instance_values(
        FUNCTION,
        RequiredInstanceValues {
            id: &instance.id,
            region: &instance.region,
            image: &instance.image,
            state: &instance.state,
            instance_type: &instance.instance_type,
            root_disk_storage_type: &instance.root_disk_storage_type,
            contract: &instance.contract,
        },
        ips,
        optional,
    )
}

/// Adapts the compact listing variant; detail-only fields stay absent
pub fn adapt_instance(instance: &sdk::Instance) -> Result<Instance, AdapterError> {
    const FUNCTION: &str = "adapt_instance";

    let ips = instance
        .ips
        .iter()
        .map(adapt_ip)
        .collect::<Result<Vec<_>, _>>()
        .map_err(nested_err(FUNCTION))?;

    let optional = adapt_optional_instance_values(
        FUNCTION,
        instance.root_disk_size,
        instance.reference.as_deref(),
        instance.market_app_id.as_deref(),
        &instance.resources,
        instance.started_at,
        instance.auto_scaling_group.as_ref(),
    )?;

    adapt_required_instance_values(
        FUNCTION,
        RequiredInstanceValues {
            id: &instance.id,
            region: &instance.region,
            image: &instance.image,
            state: &instance.state,
            instance_type: &instance.instance_type,
            root_disk_storage_type: &instance.root_disk_storage_type,
            contract: &instance.contract,
        },
        ips,
        optional,
    )
}

struct RequiredInstanceValues<'a> {
    id: &'a str,
    region: &'a str,
    image: &'a sdk::Image,
    state: &'a str,
    instance_type: &'a str,
    root_disk_storage_type: &'a str,
    contract: &'a sdk::Contract,
}

fn adapt_required_instance_values(
    function: &'static str,
    values: RequiredInstanceValues<'_>,
    ips: Vec<Ip>,
    optional: OptionalInstanceValues,
) -> Result<Instance, AdapterError> {
    let id = Uuid::parse(values.id).map_err(field_err(function, "id"))?;
    let image = adapt_image(values.image).map_err(nested_err(function))?;
    let state = State::parse(values.state).map_err(domain_err(function))?;
    let instance_type = InstanceType::parse(values.instance_type).map_err(domain_err(function))?;
    let root_disk_storage_type =
        StorageType::parse(values.root_disk_storage_type).map_err(domain_err(function))?;
    let contract = adapt_contract(values.contract).map_err(nested_err(function))?;

    Ok(Instance::new(
        id,
        Region::from(values.region),
        image,
        state,
        instance_type,
        root_disk_storage_type,
        ips,
        contract,
        optional,
    ))
}

fn adapt_optional_instance_values(
    function: &'static str,
    root_disk_size: i64,
    reference: Option<&str>,
    market_app_id: Option<&str>,
    resources: &sdk::Resources,
    started_at: Option<chrono::DateTime<chrono::Utc>>,
    auto_scaling_group: Option<&sdk::AutoScalingGroup>,
) -> Result<OptionalInstanceValues, AdapterError> {
    let root_disk_size =
        RootDiskSize::new(root_disk_size).map_err(field_err(function, "root_disk_size"))?;

    let auto_scaling_group = auto_scaling_group
        .map(adapt_auto_scaling_group)
        .transpose()
        .map_err(nested_err(function))?;

    Ok(OptionalInstanceValues {
        root_disk_size: Some(root_disk_size),
        resources: Some(adapt_resources(resources)),
        reference: reference.map(str::to_string),
        market_app_id: market_app_id.map(str::to_string),
        started_at,
        auto_scaling_group,
        ..Default::default()
    })
}

pub(crate) fn adapt_image(image: &sdk::Image) -> Result<Image, AdapterError> {
    const FUNCTION: &str = "adapt_image";

    let id = ImageId::parse(&image.id).map_err(domain_err(FUNCTION))?;
    let storage_types = image
        .storage_types
        .iter()
        .map(|s| StorageType::parse(s))
        .collect::<Result<Vec<_>, _>>()
        .map_err(domain_err(FUNCTION))?;

    Ok(Image::new(
        id,
        &image.name,
        &image.family,
        &image.flavour,
        image.custom,
        OptionalImageValues {
            version: image.version.clone(),
            architecture: image.architecture.clone(),
            state: image.state.clone(),
            state_reason: image.state_reason.clone(),
            region: image.region.as_deref().map(Region::from),
            created_at: image.created_at,
            updated_at: image.updated_at,
            storage_size: image.storage_size.as_ref().map(adapt_storage_size),
            market_apps: image.market_apps.clone(),
            storage_types,
        },
    ))
}

pub(crate) fn adapt_contract(contract: &sdk::Contract) -> Result<Contract, AdapterError> {
    const FUNCTION: &str = "adapt_contract";

    let billing_frequency =
        ContractBillingFrequency::parse(contract.billing_frequency).map_err(domain_err(FUNCTION))?;
    let term = ContractTerm::parse(contract.term).map_err(domain_err(FUNCTION))?;
    let contract_type = ContractType::parse(&contract.contract_type).map_err(domain_err(FUNCTION))?;
    let state = ContractState::parse(&contract.state).map_err(domain_err(FUNCTION))?;

    Contract::new(
        billing_frequency,
        term,
        contract_type,
        state,
        contract.ends_at,
        contract.renewals_at,
        contract.created_at,
    )
    .map_err(domain_err(FUNCTION))
}

pub(crate) fn adapt_ip(ip: &sdk::Ip) -> Result<Ip, AdapterError> {
    let network_type = NetworkType::parse(&ip.network_type).map_err(domain_err("adapt_ip"))?;

    Ok(Ip::new(
        &ip.ip,
        &ip.prefix_length,
        ip.version,
        ip.null_routed,
        ip.main_ip,
        network_type,
        OptionalIpValues {
            reverse_lookup: ip.reverse_lookup.clone(),
            ddos: None,
        },
    ))
}

pub(crate) fn adapt_ip_details(ip: &sdk::IpDetails) -> Result<Ip, AdapterError> {
    let network_type =
        NetworkType::parse(&ip.network_type).map_err(domain_err("adapt_ip_details"))?;

    Ok(Ip::new(
        &ip.ip,
        &ip.prefix_length,
        ip.version,
        ip.null_routed,
        ip.main_ip,
        network_type,
        OptionalIpValues {
            reverse_lookup: ip.reverse_lookup.clone(),
            ddos: ip.ddos.as_ref().map(adapt_ddos),
        },
    ))
}

fn adapt_ddos(ddos: &sdk::Ddos) -> Ddos {
    Ddos {
        detection_profile: ddos.detection_profile.clone(),
        protection_type: ddos.protection_type.clone(),
    }
}

pub(crate) fn adapt_resources(resources: &sdk::Resources) -> Resources {
    Resources {
        cpu: Cpu {
            value: resources.cpu.value,
            unit: resources.cpu.unit.clone(),
        },
        memory: Memory {
            value: resources.memory.value,
            unit: resources.memory.unit.clone(),
        },
        public_network_speed: adapt_network_speed(&resources.public_network_speed),
        private_network_speed: adapt_network_speed(&resources.private_network_speed),
    }
}

fn adapt_network_speed(speed: &sdk::NetworkSpeed) -> NetworkSpeed {
    NetworkSpeed {
        value: speed.value,
        unit: speed.unit.clone(),
    }
}

fn adapt_storage_size(size: &sdk::StorageSize) -> StorageSize {
    StorageSize {
        size: size.size,
        unit: size.unit.clone(),
    }
}

fn adapt_iso(iso: &sdk::Iso) -> Iso {
    Iso {
        id: iso.id.clone(),
        name: iso.name.clone(),
    }
}

fn adapt_private_network(private_network: &sdk::PrivateNetwork) -> PrivateNetwork {
    PrivateNetwork {
        id: private_network.id.clone(),
        status: private_network.status.clone(),
        subnet: private_network.subnet.clone(),
    }
}

fn adapt_volume(volume: &sdk::Volume) -> Volume {
    Volume {
        size: volume.size,
        unit: volume.unit.clone(),
    }
}

pub(crate) fn adapt_auto_scaling_group(
    group: &sdk::AutoScalingGroup,
) -> Result<AutoScalingGroup, AdapterError> {
    const FUNCTION: &str = "adapt_auto_scaling_group";

    let id = Uuid::parse(&group.id).map_err(field_err(FUNCTION, "id"))?;
    let group_type =
        AutoScalingGroupType::parse(&group.auto_scaling_group_type).map_err(domain_err(FUNCTION))?;
    let state = AutoScalingGroupState::parse(&group.state).map_err(domain_err(FUNCTION))?;
    let reference =
        AutoScalingGroupReference::new(&group.reference).map_err(field_err(FUNCTION, "reference"))?;
    let load_balancer = group
        .load_balancer
        .as_ref()
        .map(adapt_load_balancer)
        .transpose()
        .map_err(nested_err(FUNCTION))?;

    Ok(AutoScalingGroup::new(
        id,
        group_type,
        state,
        Region::from(group.region.as_str()),
        reference,
        group.created_at,
        group.updated_at,
        OptionalAutoScalingGroupValues {
            desired_amount: group.desired_amount,
            starts_at: group.starts_at,
            ends_at: group.ends_at,
            minimum_amount: group.minimum_amount,
            maximum_amount: group.maximum_amount,
            cpu_threshold: group.cpu_threshold,
            warmup_time: group.warmup_time,
            cooldown_time: group.cooldown_time,
            load_balancer,
        },
    ))
}

pub(crate) fn adapt_load_balancer(
    load_balancer: &sdk::LoadBalancer,
) -> Result<LoadBalancer, AdapterError> {
    const FUNCTION: &str = "adapt_load_balancer";

    let id = Uuid::parse(&load_balancer.id).map_err(field_err(FUNCTION, "id"))?;
    let load_balancer_type =
        InstanceType::parse(&load_balancer.load_balancer_type).map_err(domain_err(FUNCTION))?;
    let state = State::parse(&load_balancer.state).map_err(domain_err(FUNCTION))?;
    let contract = adapt_contract(&load_balancer.contract).map_err(nested_err(FUNCTION))?;
    let ips = load_balancer
        .ips
        .iter()
        .map(adapt_ip)
        .collect::<Result<Vec<_>, _>>()
        .map_err(nested_err(FUNCTION))?;
    let configuration = load_balancer
        .configuration
        .as_ref()
        .map(adapt_load_balancer_configuration)
        .transpose()
        .map_err(nested_err(FUNCTION))?;

    Ok(LoadBalancer::new(
        id,
        load_balancer_type,
        adapt_resources(&load_balancer.resources),
        Region::from(load_balancer.region.as_str()),
        state,
        contract,
        ips,
        OptionalLoadBalancerValues {
            reference: load_balancer.reference.clone(),
            started_at: load_balancer.started_at,
            private_network: load_balancer
                .private_network
                .as_ref()
                .map(adapt_private_network),
            configuration,
        },
    ))
}

fn adapt_load_balancer_configuration(
    configuration: &sdk::LoadBalancerConfiguration,
) -> Result<LoadBalancerConfiguration, AdapterError> {
    const FUNCTION: &str = "adapt_load_balancer_configuration";

    let balance = Balance::parse(&configuration.balance).map_err(domain_err(FUNCTION))?;
    let health_check = configuration
        .health_check
        .as_ref()
        .map(adapt_health_check)
        .transpose()
        .map_err(nested_err(FUNCTION))?;

    Ok(LoadBalancerConfiguration::new(
        balance,
        configuration.x_forwarded_for,
        configuration.idle_timeout,
        configuration.target_port,
        OptionalLoadBalancerConfigurationValues {
            sticky_session: configuration
                .sticky_session
                .as_ref()
                .map(|s| StickySession {
                    enabled: s.enabled,
                    max_life_time: s.max_life_time,
                }),
            health_check,
        },
    ))
}

fn adapt_health_check(health_check: &sdk::HealthCheck) -> Result<HealthCheck, AdapterError> {
    let method = Method::parse(&health_check.method).map_err(domain_err("adapt_health_check"))?;

    Ok(HealthCheck {
        method,
        uri: health_check.uri.clone(),
        port: health_check.port,
        host: health_check.host.clone(),
    })
}

pub fn adapt_region(region: &sdk::Region) -> Region {
    Region::new(&region.name, &region.location)
}

pub fn adapt_instance_type(
    instance_type: &sdk::InstanceType,
) -> Result<InstanceTypeDetails, AdapterError> {
    let storage_types = instance_type
        .storage_types
        .iter()
        .flatten()
        .map(|s| StorageType::parse(s))
        .collect::<Result<Vec<_>, _>>()
        .map_err(domain_err("adapt_instance_type"))?;

    Ok(InstanceTypeDetails {
        name: instance_type.name.clone(),
        resources: adapt_resources(&instance_type.resources),
        prices: adapt_prices(&instance_type.prices),
        storage_types,
    })
}

fn adapt_prices(prices: &sdk::Prices) -> Prices {
    let price = |p: &sdk::Price| Price {
        hourly_price: p.hourly_price.clone(),
        monthly_price: p.monthly_price.clone(),
    };

    Prices {
        currency: prices.currency.clone(),
        currency_symbol: prices.currency_symbol.clone(),
        compute: price(&prices.compute),
        storage: Storage {
            local: price(&prices.storage.local),
            central: price(&prices.storage.central),
        },
    }
}
