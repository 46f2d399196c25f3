//! Domain entities to request bodies

use crate::api::public_cloud::{LaunchInstanceOpts, UpdateInstanceOpts};
use crate::domain::public_cloud::{Instance, InstanceUpdate};

pub fn adapt_to_launch_instance_opts(instance: &Instance) -> LaunchInstanceOpts {
    LaunchInstanceOpts {
        region: instance.region.name.clone(),
        instance_type: instance.instance_type.to_string(),
        image_id: instance.image.id.to_string(),
        contract_type: instance.contract.contract_type.to_string(),
        contract_term: instance.contract.term.value(),
        billing_frequency: instance.contract.billing_frequency.value(),
        root_disk_storage_type: instance.root_disk_storage_type.to_string(),
        reference: instance.reference.clone(),
        market_app_id: instance.market_app_id.clone(),
        ssh_key: instance.ssh_key.as_ref().map(|key| key.to_string()),
        root_disk_size: instance.root_disk_size.map(|size| size.value()),
    }
}

/// Absent fields stay absent so the service leaves them unchanged
pub fn adapt_to_update_instance_opts(update: &InstanceUpdate) -> UpdateInstanceOpts {
    UpdateInstanceOpts {
        instance_type: update.instance_type.map(|t| t.to_string()),
        reference: update.reference.clone(),
        contract_type: update.contract_type.map(|t| t.to_string()),
        contract_term: update.contract_term.map(|t| t.value()),
        billing_frequency: update.billing_frequency.map(|f| f.value()),
        root_disk_size: update.root_disk_size.map(|size| size.value()),
    }
}
