use super::enums::{
    ContractBillingFrequency, ContractState, ContractTerm, ContractType, ImageId, InstanceType,
    RootDiskStorageType, State,
};
use super::value_object::{RootDiskSize, SshKey, Uuid};
use super::{
    AutoScalingGroup, Contract, DomainError, Image, Ip, Iso, OptionalImageValues, PrivateNetwork,
    Region, Resources, Volume,
};
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub id: Uuid,
    pub region: Region,
    pub image: Image,
    pub state: State,
    pub instance_type: InstanceType,
    pub root_disk_storage_type: RootDiskStorageType,
    pub root_disk_size: Option<RootDiskSize>,
    pub ips: Vec<Ip>,
    pub contract: Contract,
    pub resources: Option<Resources>,
    pub reference: Option<String>,
    pub market_app_id: Option<String>,
    pub ssh_key: Option<SshKey>,
    pub started_at: Option<DateTime<Utc>>,
    pub iso: Option<Iso>,
    pub private_network: Option<PrivateNetwork>,
    pub auto_scaling_group: Option<AutoScalingGroup>,
    pub volume: Option<Volume>,
}

#[derive(Debug, Clone, Default)]
pub struct OptionalInstanceValues {
    pub root_disk_size: Option<RootDiskSize>,
    pub resources: Option<Resources>,
    pub reference: Option<String>,
    pub market_app_id: Option<String>,
    pub ssh_key: Option<SshKey>,
    pub started_at: Option<DateTime<Utc>>,
    pub iso: Option<Iso>,
    pub private_network: Option<PrivateNetwork>,
    pub auto_scaling_group: Option<AutoScalingGroup>,
    pub volume: Option<Volume>,
}

#[derive(Debug, Clone, Default)]
pub struct OptionalCreateInstanceValues {
    pub market_app_id: Option<String>,
    pub reference: Option<String>,
    pub ssh_key: Option<SshKey>,
    pub root_disk_size: Option<RootDiskSize>,
}

#[derive(Debug, Clone, Default)]
pub struct OptionalUpdateInstanceValues {
    pub instance_type: Option<InstanceType>,
    pub reference: Option<String>,
    pub contract_type: Option<ContractType>,
    pub contract_term: Option<ContractTerm>,
    pub billing_frequency: Option<ContractBillingFrequency>,
    pub root_disk_size: Option<RootDiskSize>,
}

/// Sparse update: `None` leaves the remote value unchanged
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceUpdate {
    pub id: Uuid,
    pub instance_type: Option<InstanceType>,
    pub reference: Option<String>,
    pub contract_type: Option<ContractType>,
    pub contract_term: Option<ContractTerm>,
    pub billing_frequency: Option<ContractBillingFrequency>,
    pub root_disk_size: Option<RootDiskSize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReasonInstanceCannotBeTerminated {
    StateIs(State),
    ContractEndsAtIsSet,
}

impl fmt::Display for ReasonInstanceCannotBeTerminated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateIs(state) => write!(f, "state is {}", state),
            Self::ContractEndsAtIsSet => f.write_str("contract.endsAt is set"),
        }
    }
}

impl Instance {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        region: Region,
        image: Image,
        state: State,
        instance_type: InstanceType,
        root_disk_storage_type: RootDiskStorageType,
        ips: Vec<Ip>,
        contract: Contract,
        optional: OptionalInstanceValues,
    ) -> Self {
        Self {
            id,
            region,
            image,
            state,
            instance_type,
            root_disk_storage_type,
            root_disk_size: optional.root_disk_size,
            ips,
            contract,
            resources: optional.resources,
            reference: optional.reference,
            market_app_id: optional.market_app_id,
            ssh_key: optional.ssh_key,
            started_at: optional.started_at,
            iso: optional.iso,
            private_network: optional.private_network,
            auto_scaling_group: optional.auto_scaling_group,
            volume: optional.volume,
        }
    }

    /// Builds the instance to launch. The id is local only, the service assigns the real one.
    #[allow(clippy::too_many_arguments)]
    pub fn for_create(
        region: Region,
        instance_type: InstanceType,
        root_disk_storage_type: RootDiskStorageType,
        image_id: ImageId,
        contract_type: ContractType,
        contract_term: ContractTerm,
        billing_frequency: ContractBillingFrequency,
        allowed_instance_types: &[String],
        optional: OptionalCreateInstanceValues,
    ) -> Result<Self, DomainError> {
        ensure_instance_type_allowed(instance_type, allowed_instance_types)?;

        let contract = Contract::new(
            billing_frequency,
            contract_term,
            contract_type,
            ContractState::Active,
            None,
            None,
            None,
        )?;

        let image = Image::new(image_id, "", "", "", false, OptionalImageValues::default());

        Ok(Self::new(
            Uuid::generate(),
            region,
            image,
            State::Creating,
            instance_type,
            root_disk_storage_type,
            vec![],
            contract,
            OptionalInstanceValues {
                root_disk_size: optional.root_disk_size,
                reference: optional.reference,
                market_app_id: optional.market_app_id,
                ssh_key: optional.ssh_key,
                ..Default::default()
            },
        ))
    }

    /// `allowed_instance_types` must already include the current type of the instance
    pub fn for_update(
        id: Uuid,
        allowed_instance_types: &[String],
        values: OptionalUpdateInstanceValues,
    ) -> Result<InstanceUpdate, DomainError> {
        if let Some(instance_type) = values.instance_type {
            ensure_instance_type_allowed(instance_type, allowed_instance_types)?;
        }

        if let (Some(contract_type), Some(contract_term)) =
            (values.contract_type, values.contract_term)
        {
            Contract::validate_term(contract_term, contract_type)?;
        }

        Ok(InstanceUpdate {
            id,
            instance_type: values.instance_type,
            reference: values.reference,
            contract_type: values.contract_type,
            contract_term: values.contract_term,
            billing_frequency: values.billing_frequency,
            root_disk_size: values.root_disk_size,
        })
    }

    pub fn can_be_terminated(&self) -> Result<(), ReasonInstanceCannotBeTerminated> {
        if matches!(
            self.state,
            State::Creating | State::Destroying | State::Destroyed
        ) {
            return Err(ReasonInstanceCannotBeTerminated::StateIs(self.state));
        }

        if self.contract.ends_at.is_some() {
            return Err(ReasonInstanceCannotBeTerminated::ContractEndsAtIsSet);
        }

        Ok(())
    }
}

fn ensure_instance_type_allowed(
    instance_type: InstanceType,
    allowed_instance_types: &[String],
) -> Result<(), DomainError> {
    if allowed_instance_types
        .iter()
        .any(|allowed| allowed == instance_type.as_str())
    {
        return Ok(());
    }

    Err(DomainError::InvalidInstanceType {
        instance_type: instance_type.to_string(),
        allowed: allowed_instance_types.to_vec(),
    })
}
