use super::data_adapters::{
    adapt_instance, adapt_instance_details, adapt_instance_to_resource_model, adapt_instance_type,
    adapt_instances_to_data_source_model, adapt_region, adapt_to_create_instance,
    adapt_to_launch_instance_opts, adapt_to_update_instance, adapt_to_update_instance_opts,
    field_err, AdapterError,
};
use super::validators::{InstanceTerminationCapability, InstanceTypeCapability, RegionCapability};
use crate::api::Client;
use crate::domain::public_cloud::enums::{
    ContractBillingFrequency, ContractTerm, ContractType, ImageId, RootDiskStorageType,
};
use crate::domain::public_cloud::value_object::{RootDiskSize, SshKey, Uuid};
use crate::domain::public_cloud::{
    Contract, InstanceTypeDetails, ReasonInstanceCannotBeTerminated, Region,
};
use crate::error::{Error, Result};
use crate::models::public_cloud::{InstanceResourceModel, InstancesDataSourceModel};
use async_trait::async_trait;
use tfplug::context::Context;

/// Sequences adapters and remote calls for the public cloud instance lifecycle
#[derive(Clone)]
pub struct PublicCloudFacade {
    client: Client,
}

impl PublicCloudFacade {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn get_all_instances(&self, ctx: &Context) -> Result<InstancesDataSourceModel> {
        tracing::debug!("Listing public cloud instances");
        let instances = self.client.public_cloud().list_instances(ctx).await?;

        let instances = instances
            .iter()
            .map(adapt_instance)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(adapt_instances_to_data_source_model(&instances)?)
    }

    pub async fn get_instance(&self, ctx: &Context, id: &str) -> Result<InstanceResourceModel> {
        let id = parse_id("get_instance", id)?;

        tracing::debug!(id = %id, "Reading public cloud instance");
        let instance = self
            .client
            .public_cloud()
            .get_instance(ctx, &id.to_string())
            .await?;

        let instance = adapt_instance_details(&instance)?;
        Ok(adapt_instance_to_resource_model(&instance)?)
    }

    /// Launches the planned instance; the type must be offered in the planned region
    pub async fn create_instance(
        &self,
        ctx: &Context,
        plan: &InstanceResourceModel,
    ) -> Result<InstanceResourceModel> {
        let allowed_instance_types = match plan.region.as_known() {
            Some(region) => self.instance_type_names_for_region(ctx, region).await?,
            None => Vec::new(),
        };

        let instance = adapt_to_create_instance(plan, &allowed_instance_types)?;
        let opts = adapt_to_launch_instance_opts(&instance);

        tracing::debug!(region = %opts.region, instance_type = %opts.instance_type, "Launching public cloud instance");
        let launched = self.client.public_cloud().launch_instance(ctx, &opts).await?;

        let instance = adapt_instance(&launched)?;
        Ok(adapt_instance_to_resource_model(&instance)?)
    }

    /// Applies a sparse update; the current type of the instance is always allowed
    pub async fn update_instance(
        &self,
        ctx: &Context,
        plan: &InstanceResourceModel,
    ) -> Result<InstanceResourceModel> {
        let id = plan
            .id
            .as_known()
            .cloned()
            .unwrap_or_default();
        let id = parse_id("update_instance", &id)?.to_string();

        let mut allowed_instance_types = self.instance_type_names_for_update(ctx, &id).await?;
        let current = self.client.public_cloud().get_instance(ctx, &id).await?;
        if !allowed_instance_types.contains(&current.instance_type) {
            allowed_instance_types.push(current.instance_type);
        }

        let update = adapt_to_update_instance(plan, &allowed_instance_types)?;
        let opts = adapt_to_update_instance_opts(&update);

        tracing::debug!(id = %id, "Updating public cloud instance");
        let updated = self
            .client
            .public_cloud()
            .update_instance(ctx, &id, &opts)
            .await?;

        let instance = adapt_instance_details(&updated)?;
        Ok(adapt_instance_to_resource_model(&instance)?)
    }

    pub async fn delete_instance(&self, ctx: &Context, id: &str) -> Result<()> {
        let id = parse_id("delete_instance", id)?;

        tracing::debug!(id = %id, "Terminating public cloud instance");
        self.client
            .public_cloud()
            .terminate_instance(ctx, &id.to_string())
            .await?;
        Ok(())
    }

    /// Fails with [`Error::InstanceNotTerminable`] when the service would refuse the termination
    pub async fn ensure_instance_can_be_terminated(&self, ctx: &Context, id: &str) -> Result<()> {
        match self.can_instance_be_terminated(ctx, id).await? {
            None => Ok(()),
            Some(reason) => Err(Error::InstanceNotTerminable {
                id: id.to_string(),
                reason,
            }),
        }
    }

    pub async fn get_regions(&self, ctx: &Context) -> Result<Vec<Region>> {
        let regions = self.client.public_cloud().get_regions(ctx).await?;
        Ok(regions.iter().map(adapt_region).collect())
    }

    pub async fn get_instance_types_for_region(
        &self,
        ctx: &Context,
        region: &str,
    ) -> Result<Vec<InstanceTypeDetails>> {
        let instance_types = self
            .client
            .public_cloud()
            .get_instance_types(ctx, region)
            .await?;

        Ok(instance_types
            .iter()
            .map(adapt_instance_type)
            .collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub async fn get_available_instance_types_for_update(
        &self,
        ctx: &Context,
        id: &str,
    ) -> Result<Vec<InstanceTypeDetails>> {
        let id = parse_id("get_available_instance_types_for_update", id)?;
        let instance_types = self
            .client
            .public_cloud()
            .get_available_instance_types_for_update(ctx, &id.to_string())
            .await?;

        Ok(instance_types
            .iter()
            .map(adapt_instance_type)
            .collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub fn get_image_ids() -> Vec<String> {
        ImageId::values()
    }

    pub fn get_root_disk_storage_types() -> Vec<String> {
        RootDiskStorageType::values()
    }

    pub fn get_billing_frequencies() -> Vec<i64> {
        ContractBillingFrequency::values()
    }

    pub fn get_contract_terms() -> Vec<i64> {
        ContractTerm::values()
    }

    pub fn get_contract_types() -> Vec<String> {
        ContractType::values()
    }

    pub fn get_min_root_disk_size() -> i64 {
        RootDiskSize::MIN
    }

    pub fn get_max_root_disk_size() -> i64 {
        RootDiskSize::MAX
    }

    pub fn get_ssh_key_regular_expression() -> &'static str {
        SshKey::REGULAR_EXPRESSION
    }

    pub fn validate_contract_term(contract_term: i64, contract_type: &str) -> Result<()> {
        let contract_term = ContractTerm::parse(contract_term)?;
        let contract_type = ContractType::parse(contract_type)?;
        Ok(Contract::validate_term(contract_term, contract_type)?)
    }

    async fn instance_type_names_for_region(
        &self,
        ctx: &Context,
        region: &str,
    ) -> Result<Vec<String>> {
        let instance_types = self
            .client
            .public_cloud()
            .get_instance_types(ctx, region)
            .await?;
        Ok(instance_types.into_iter().map(|t| t.name).collect())
    }

    async fn instance_type_names_for_update(&self, ctx: &Context, id: &str) -> Result<Vec<String>> {
        let instance_types = self
            .client
            .public_cloud()
            .get_available_instance_types_for_update(ctx, id)
            .await?;
        Ok(instance_types.into_iter().map(|t| t.name).collect())
    }
}

fn parse_id(function: &'static str, id: &str) -> std::result::Result<Uuid, AdapterError> {
    Uuid::parse(id).map_err(field_err(function, "id"))
}

#[async_trait]
impl RegionCapability for PublicCloudFacade {
    async fn does_region_exist(&self, ctx: &Context, region: &str) -> Result<(bool, Vec<String>)> {
        let regions: Vec<String> = self
            .get_regions(ctx)
            .await?
            .into_iter()
            .map(|r| r.name)
            .collect();
        let exists = regions.iter().any(|r| r == region);
        Ok((exists, regions))
    }
}

#[async_trait]
impl InstanceTypeCapability for PublicCloudFacade {
    async fn is_instance_type_available_for_region(
        &self,
        ctx: &Context,
        instance_type: &str,
        region: &str,
    ) -> Result<(bool, Vec<String>)> {
        let available = self.instance_type_names_for_region(ctx, region).await?;
        let is_available = available.iter().any(|t| t == instance_type);
        Ok((is_available, available))
    }

    async fn can_instance_type_be_used_with_instance(
        &self,
        ctx: &Context,
        id: &str,
        instance_type: &str,
    ) -> Result<(bool, Vec<String>)> {
        let id = parse_id("can_instance_type_be_used_with_instance", id)?.to_string();

        let mut allowed = self.instance_type_names_for_update(ctx, &id).await?;
        let current = self.client.public_cloud().get_instance(ctx, &id).await?;
        if !allowed.contains(&current.instance_type) {
            allowed.insert(0, current.instance_type);
        }

        let can_be_used = allowed.iter().any(|t| t == instance_type);
        Ok((can_be_used, allowed))
    }
}

#[async_trait]
impl InstanceTerminationCapability for PublicCloudFacade {
    async fn can_instance_be_terminated(
        &self,
        ctx: &Context,
        id: &str,
    ) -> Result<Option<ReasonInstanceCannotBeTerminated>> {
        let id = parse_id("can_instance_be_terminated", id)?;
        let instance = self
            .client
            .public_cloud()
            .get_instance(ctx, &id.to_string())
            .await?;

        let instance = adapt_instance_details(&instance)?;
        Ok(instance.can_be_terminated().err())
    }
}
