//! Resource models to domain entities

use super::{domain_err, field_err, AdapterError};
use crate::domain::public_cloud::enums::{
    ContractBillingFrequency, ContractTerm, ContractType, ImageId, InstanceType,
    RootDiskStorageType,
};
use crate::domain::public_cloud::value_object::{RootDiskSize, SshKey, Uuid};
use crate::domain::public_cloud::{
    Instance, InstanceUpdate, OptionalCreateInstanceValues, OptionalUpdateInstanceValues, Region,
};
use crate::models::public_cloud::{ContractResourceModel, ImageResourceModel, InstanceResourceModel};
use tfplug::types::{AttributePath, Diagnostic, DynamicValue};
use tfplug::value::FromDynamic;
use tfplug::Value;

/// Decodes a plan or state tree into the instance resource model
pub fn decode_instance_resource_model(
    value: &DynamicValue,
) -> Result<InstanceResourceModel, AdapterError> {
    InstanceResourceModel::from_dynamic(&value.value, &AttributePath::root()).map_err(
        |diagnostics| AdapterError::ConfigDecode {
            function: "decode_instance_resource_model",
            diagnostics,
        },
    )
}

/// Builds the instance to launch from a planned resource model.
///
/// `allowed_instance_types` is the list of types available in the planned region.
pub fn adapt_to_create_instance(
    model: &InstanceResourceModel,
    allowed_instance_types: &[String],
) -> Result<Instance, AdapterError> {
    const FUNCTION: &str = "adapt_to_create_instance";

    let image = required(FUNCTION, &model.image, "image")?;
    let contract = required(FUNCTION, &model.contract, "contract")?;

    let region = required(FUNCTION, &model.region, "region")?;
    let instance_type = InstanceType::parse(&required(FUNCTION, &model.instance_type, "type")?)
        .map_err(domain_err(FUNCTION))?;
    let root_disk_storage_type = RootDiskStorageType::parse(&required(
        FUNCTION,
        &model.root_disk_storage_type,
        "root_disk_storage_type",
    )?)
    .map_err(domain_err(FUNCTION))?;
    let image_id = adapt_image_id(FUNCTION, &image)?;
    let (contract_type, contract_term, billing_frequency) = adapt_contract(FUNCTION, &contract)?;

    let optional = OptionalCreateInstanceValues {
        market_app_id: non_empty(&model.market_app_id),
        reference: non_empty(&model.reference),
        ssh_key: non_empty(&model.ssh_key)
            .map(|key| SshKey::new(&key))
            .transpose()
            .map_err(field_err(FUNCTION, "ssh_key"))?,
        root_disk_size: adapt_root_disk_size(FUNCTION, &model.root_disk_size)?,
    };

    Instance::for_create(
        Region::from(region),
        instance_type,
        root_disk_storage_type,
        image_id,
        contract_type,
        contract_term,
        billing_frequency,
        allowed_instance_types,
        optional,
    )
    .map_err(domain_err(FUNCTION))
}

/// Builds a sparse update from a planned resource model.
///
/// `allowed_instance_types` must contain the current type of the instance.
/// Strings only count as set when known and non-empty; the contract term is
/// taken whenever known since 0 is a legitimate term.
pub fn adapt_to_update_instance(
    model: &InstanceResourceModel,
    allowed_instance_types: &[String],
) -> Result<InstanceUpdate, AdapterError> {
    const FUNCTION: &str = "adapt_to_update_instance";

    let id = Uuid::parse(&required(FUNCTION, &model.id, "id")?)
        .map_err(field_err(FUNCTION, "id"))?;

    let mut values = OptionalUpdateInstanceValues {
        instance_type: non_empty(&model.instance_type)
            .map(|t| InstanceType::parse(&t))
            .transpose()
            .map_err(domain_err(FUNCTION))?,
        reference: non_empty(&model.reference),
        root_disk_size: adapt_root_disk_size(FUNCTION, &model.root_disk_size)?,
        ..Default::default()
    };

    if let Some(contract) = model.contract.as_known() {
        values.contract_type = non_empty(&contract.contract_type)
            .map(|t| ContractType::parse(&t))
            .transpose()
            .map_err(domain_err(FUNCTION))?;
        values.contract_term = contract
            .term
            .as_known()
            .map(|term| ContractTerm::parse(*term))
            .transpose()
            .map_err(domain_err(FUNCTION))?;
        values.billing_frequency = contract
            .billing_frequency
            .as_known()
            .map(|frequency| ContractBillingFrequency::parse(*frequency))
            .transpose()
            .map_err(domain_err(FUNCTION))?;
    }

    Instance::for_update(id, allowed_instance_types, values).map_err(domain_err(FUNCTION))
}

fn adapt_image_id(
    function: &'static str,
    image: &ImageResourceModel,
) -> Result<ImageId, AdapterError> {
    let id = required_at(
        function,
        &image.id,
        AttributePath::new("image").attribute("id"),
    )?;
    ImageId::parse(&id).map_err(domain_err(function))
}

fn adapt_contract(
    function: &'static str,
    contract: &ContractResourceModel,
) -> Result<(ContractType, ContractTerm, ContractBillingFrequency), AdapterError> {
    let path = AttributePath::new("contract");

    let contract_type = required_at(
        function,
        &contract.contract_type,
        path.clone().attribute("type"),
    )?;
    let term = required_at(function, &contract.term, path.clone().attribute("term"))?;
    let billing_frequency = required_at(
        function,
        &contract.billing_frequency,
        path.attribute("billing_frequency"),
    )?;

    Ok((
        ContractType::parse(&contract_type).map_err(domain_err(function))?,
        ContractTerm::parse(term).map_err(domain_err(function))?,
        ContractBillingFrequency::parse(billing_frequency).map_err(domain_err(function))?,
    ))
}

/// Zero means the size was left to the service default
fn adapt_root_disk_size(
    function: &'static str,
    value: &Value<i64>,
) -> Result<Option<RootDiskSize>, AdapterError> {
    match value.as_known() {
        Some(0) | None => Ok(None),
        Some(size) => RootDiskSize::new(*size)
            .map(Some)
            .map_err(field_err(function, "root_disk_size")),
    }
}

fn non_empty(value: &Value<String>) -> Option<String> {
    value.as_known().filter(|s| !s.is_empty()).cloned()
}

fn required<T: Clone>(
    function: &'static str,
    value: &Value<T>,
    attribute: &str,
) -> Result<T, AdapterError> {
    required_at(function, value, AttributePath::new(attribute))
}

fn required_at<T: Clone>(
    function: &'static str,
    value: &Value<T>,
    path: AttributePath,
) -> Result<T, AdapterError> {
    match value {
        Value::Known(v) => Ok(v.clone()),
        Value::Unknown => Err(missing(function, path, "value is not known yet")),
        Value::Null => Err(missing(function, path, "value is required")),
    }
}

fn missing(function: &'static str, path: AttributePath, detail: &str) -> AdapterError {
    AdapterError::ConfigDecode {
        function,
        diagnostics: Diagnostic::error("Missing Attribute Value", detail)
            .with_attribute(path)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::public_cloud::enums::State;
    use crate::domain::public_cloud::DomainError;
    use crate::models::public_cloud::IpResourceModel;
    use std::collections::HashMap;
    use tfplug::types::Dynamic;

    const ID: &str = "ace712e9-a166-47f1-9065-4af0f7e7fce1";
    const SSH_KEY: &str =
        "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIBYQmRWXiBNvdf5tJ8YJ6e2lk2/1ZaGhGmNNxd2VpRkp user@host";

    fn known(value: &str) -> Value<String> {
        Value::known(value.to_string())
    }

    fn allowed() -> Vec<String> {
        vec!["lsw.m5a.4xlarge".to_string(), "lsw.m3.large".to_string()]
    }

    fn plan() -> InstanceResourceModel {
        InstanceResourceModel {
            id: Value::unknown(),
            region: known("eu-west-3"),
            reference: known("reference"),
            image: Value::known(ImageResourceModel {
                id: known("UBUNTU_20_04_64BIT"),
                ..Default::default()
            }),
            state: Value::unknown(),
            instance_type: known("lsw.m5a.4xlarge"),
            root_disk_size: Value::known(55),
            root_disk_storage_type: known("CENTRAL"),
            ips: Value::unknown(),
            started_at: Value::unknown(),
            contract: Value::known(ContractResourceModel {
                billing_frequency: Value::known(1),
                term: Value::known(3),
                contract_type: known("MONTHLY"),
                ends_at: Value::unknown(),
                state: Value::unknown(),
            }),
            market_app_id: known("CPANEL_30"),
            ssh_key: known(SSH_KEY),
        }
    }

    #[test]
    fn create_from_complete_plan() {
        let instance = adapt_to_create_instance(&plan(), &allowed()).unwrap();

        assert_eq!(instance.region.name, "eu-west-3");
        assert_eq!(instance.instance_type, InstanceType::M5a4XLarge);
        assert_eq!(instance.image.id, ImageId::Ubuntu200464Bit);
        assert_eq!(instance.state, State::Creating);
        assert_eq!(instance.contract.contract_type, ContractType::Monthly);
        assert_eq!(instance.contract.term, ContractTerm::Three);
        assert_eq!(instance.root_disk_size.unwrap().value(), 55);
        assert_eq!(instance.ssh_key.unwrap().as_str(), SSH_KEY);
        assert_eq!(instance.market_app_id.as_deref(), Some("CPANEL_30"));
    }

    #[test]
    fn create_skips_unset_optionals() {
        let model = InstanceResourceModel {
            reference: Value::null(),
            market_app_id: Value::unknown(),
            ssh_key: known(""),
            root_disk_size: Value::known(0),
            ..plan()
        };

        let instance = adapt_to_create_instance(&model, &allowed()).unwrap();

        assert!(instance.reference.is_none());
        assert!(instance.market_app_id.is_none());
        assert!(instance.ssh_key.is_none());
        assert!(instance.root_disk_size.is_none());
    }

    #[test]
    fn create_rejects_invalid_ssh_key() {
        let model = InstanceResourceModel {
            ssh_key: known("tralala"),
            ..plan()
        };

        let err = adapt_to_create_instance(&model, &allowed()).unwrap_err();

        assert_eq!(
            err.domain_error(),
            Some(&DomainError::InvalidSshKey("tralala".to_string()))
        );
    }

    #[test]
    fn create_rejects_unknown_region() {
        let model = InstanceResourceModel {
            region: Value::unknown(),
            ..plan()
        };

        let err = adapt_to_create_instance(&model, &allowed()).unwrap_err();

        assert!(matches!(err, AdapterError::ConfigDecode { .. }));
        assert!(err.to_string().contains("region"));
    }

    #[test]
    fn create_reports_missing_contract_term() {
        let mut model = plan();
        if let Value::Known(contract) = &mut model.contract {
            contract.term = Value::null();
        }

        let err = adapt_to_create_instance(&model, &allowed()).unwrap_err();

        assert!(err.to_string().contains("contract.term"), "{}", err);
    }

    #[test]
    fn create_rejects_type_not_allowed_in_region() {
        let err = adapt_to_create_instance(&plan(), &["lsw.m3.large".to_string()]).unwrap_err();

        assert!(matches!(
            err.domain_error(),
            Some(DomainError::InvalidInstanceType { .. })
        ));
    }

    #[test]
    fn create_rejects_incoherent_contract() {
        let mut model = plan();
        if let Value::Known(contract) = &mut model.contract {
            contract.term = Value::known(0);
        }

        let err = adapt_to_create_instance(&model, &allowed()).unwrap_err();

        assert_eq!(err.domain_error(), Some(&DomainError::ContractTermCannotBeZero));
    }

    #[test]
    fn create_rejects_unknown_tokens() {
        let model = InstanceResourceModel {
            root_disk_storage_type: known("tralala"),
            ..plan()
        };

        let err = adapt_to_create_instance(&model, &allowed()).unwrap_err();

        assert!(err.to_string().starts_with("adapt_to_create_instance: "));
        assert!(err.to_string().contains("tralala"));
    }

    #[test]
    fn update_from_complete_plan() {
        let model = InstanceResourceModel {
            id: known(ID),
            ..plan()
        };

        let update = adapt_to_update_instance(&model, &allowed()).unwrap();

        assert_eq!(update.id.to_string(), ID);
        assert_eq!(update.instance_type, Some(InstanceType::M5a4XLarge));
        assert_eq!(update.reference.as_deref(), Some("reference"));
        assert_eq!(update.contract_type, Some(ContractType::Monthly));
        assert_eq!(update.contract_term, Some(ContractTerm::Three));
        assert_eq!(update.billing_frequency, Some(ContractBillingFrequency::One));
        assert_eq!(update.root_disk_size.unwrap().value(), 55);
    }

    #[test]
    fn update_leaves_unset_fields_absent() {
        let model = InstanceResourceModel {
            id: known(ID),
            ..Default::default()
        };

        let update = adapt_to_update_instance(&model, &[]).unwrap();

        assert!(update.instance_type.is_none());
        assert!(update.reference.is_none());
        assert!(update.contract_type.is_none());
        assert!(update.contract_term.is_none());
        assert!(update.billing_frequency.is_none());
        assert!(update.root_disk_size.is_none());
    }

    #[test]
    fn update_keeps_zero_term_for_hourly_contract() {
        let mut model = InstanceResourceModel {
            id: known(ID),
            ..plan()
        };
        if let Value::Known(contract) = &mut model.contract {
            contract.contract_type = known("HOURLY");
            contract.term = Value::known(0);
        }

        let update = adapt_to_update_instance(&model, &allowed()).unwrap();

        assert_eq!(update.contract_term, Some(ContractTerm::Zero));
    }

    #[test]
    fn update_rejects_malformed_id() {
        let model = InstanceResourceModel {
            id: known("tralala"),
            ..plan()
        };

        let err = adapt_to_update_instance(&model, &allowed()).unwrap_err();

        assert_eq!(
            err.domain_error(),
            Some(&DomainError::InvalidUuid("tralala".to_string()))
        );
    }

    #[test]
    fn update_rejects_type_not_available_for_instance() {
        let model = InstanceResourceModel {
            id: known(ID),
            ..plan()
        };

        let err = adapt_to_update_instance(&model, &["lsw.m3.large".to_string()]).unwrap_err();

        assert!(err.to_string().contains("lsw.m5a.4xlarge"));
    }

    #[test]
    fn decodes_plan_tree() {
        let plan = DynamicValue::new(Dynamic::Map(HashMap::from([
            ("id".to_string(), Dynamic::String(ID.to_string())),
            (
                "ips".to_string(),
                Dynamic::List(vec![Dynamic::Map(HashMap::from([(
                    "ip".to_string(),
                    Dynamic::String("10.0.0.1".to_string()),
                )]))]),
            ),
        ])));

        let model = decode_instance_resource_model(&plan).unwrap();

        assert_eq!(model.id, known(ID));
        assert_eq!(
            model.ips,
            Value::known(vec![IpResourceModel {
                ip: known("10.0.0.1")
            }])
        );
    }

    #[test]
    fn decode_failure_is_reported() {
        let plan = DynamicValue::new(Dynamic::String("instance".to_string()));

        let err = decode_instance_resource_model(&plan).unwrap_err();

        assert!(matches!(err, AdapterError::ConfigDecode { .. }));
    }
}
