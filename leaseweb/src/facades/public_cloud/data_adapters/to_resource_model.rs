//! Domain entities to the instance resource model

use super::{check_model, format_time, AdapterError};
use crate::domain::public_cloud::{Contract, Image, Instance, Ip};
use crate::models::public_cloud::{
    ContractResourceModel, ImageResourceModel, InstanceResourceModel, IpResourceModel,
};
use tfplug::Value;

/// Absent optional values become Null. The ssh key is never returned by the
/// service, so callers carry it over from the plan or prior state.
pub fn adapt_instance(instance: &Instance) -> Result<InstanceResourceModel, AdapterError> {
    let model = InstanceResourceModel {
        id: Value::known(instance.id.to_string()),
        region: Value::known(instance.region.name.clone()),
        reference: Value::from_option(instance.reference.clone()),
        image: Value::known(adapt_image(&instance.image)),
        state: Value::known(instance.state.to_string()),
        instance_type: Value::known(instance.instance_type.to_string()),
        root_disk_size: Value::from_option(instance.root_disk_size.map(|size| size.value())),
        root_disk_storage_type: Value::known(instance.root_disk_storage_type.to_string()),
        ips: Value::known(instance.ips.iter().map(adapt_ip).collect()),
        started_at: format_time(instance.started_at.as_ref()),
        contract: Value::known(adapt_contract(&instance.contract)),
        market_app_id: Value::from_option(instance.market_app_id.clone()),
        ssh_key: Value::from_option(instance.ssh_key.as_ref().map(|key| key.to_string())),
    };

    check_model("adapt_instance", model)
}

fn adapt_image(image: &Image) -> ImageResourceModel {
    ImageResourceModel {
        id: Value::known(image.id.to_string()),
        name: Value::known(image.name.clone()),
        family: Value::known(image.family.clone()),
        flavour: Value::known(image.flavour.clone()),
        custom: Value::known(image.custom),
    }
}

fn adapt_contract(contract: &Contract) -> ContractResourceModel {
    ContractResourceModel {
        billing_frequency: Value::known(contract.billing_frequency.value()),
        term: Value::known(contract.term.value()),
        contract_type: Value::known(contract.contract_type.to_string()),
        ends_at: format_time(contract.ends_at.as_ref()),
        state: Value::known(contract.state.to_string()),
    }
}

fn adapt_ip(ip: &Ip) -> IpResourceModel {
    IpResourceModel {
        ip: Value::known(ip.ip.clone()),
    }
}
