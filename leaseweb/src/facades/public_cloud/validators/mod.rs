//! Plan-time validators for the public cloud instance resource
//!
//! Validators that need remote knowledge consult a capability trait instead
//! of the façade directly, so tests can hand them a fake.

mod contract_term;
mod instance_termination;
mod instance_type;
mod non_updatable_string;
mod region;

pub use contract_term::ContractTermValidator;
pub use instance_termination::InstanceTerminationValidator;
pub use instance_type::InstanceTypeValidator;
pub use non_updatable_string::NonUpdatableStringValidator;
pub use region::RegionValidator;

use crate::domain::public_cloud::ReasonInstanceCannotBeTerminated;
use crate::error::Result;
use async_trait::async_trait;
use tfplug::context::Context;

#[async_trait]
pub trait InstanceTerminationCapability: Send + Sync {
    /// `None` when the instance may be terminated
    async fn can_instance_be_terminated(
        &self,
        ctx: &Context,
        id: &str,
    ) -> Result<Option<ReasonInstanceCannotBeTerminated>>;
}

#[async_trait]
pub trait InstanceTypeCapability: Send + Sync {
    /// Returns whether the type is offered in the region, and every type that is
    async fn is_instance_type_available_for_region(
        &self,
        ctx: &Context,
        instance_type: &str,
        region: &str,
    ) -> Result<(bool, Vec<String>)>;

    /// Returns whether the instance can switch to the type, and every type it can use
    async fn can_instance_type_be_used_with_instance(
        &self,
        ctx: &Context,
        id: &str,
        instance_type: &str,
    ) -> Result<(bool, Vec<String>)>;
}

#[async_trait]
pub trait RegionCapability: Send + Sync {
    async fn does_region_exist(&self, ctx: &Context, region: &str) -> Result<(bool, Vec<String>)>;
}

fn quoted_list(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("\"{}\"", v)).collect();
    format!("[{}]", items.join(" "))
}
