//! Provider data handed to resources and data sources

use crate::api::Client;
use crate::facades::dedicated_server::DedicatedServerFacade;
use crate::facades::public_cloud::PublicCloudFacade;
use std::any::Any;
use std::sync::Arc;
use tfplug::types::Diagnostics;

#[derive(Clone)]
pub struct LeasewebProviderData {
    pub public_cloud: Arc<PublicCloudFacade>,
    pub dedicated_server: Arc<DedicatedServerFacade>,
}

impl LeasewebProviderData {
    pub fn new(client: Client) -> Self {
        Self {
            public_cloud: Arc::new(PublicCloudFacade::new(client.clone())),
            dedicated_server: Arc::new(DedicatedServerFacade::new(client)),
        }
    }

    /// Downcasts the opaque data received by `configure`
    ///
    /// `None` means the provider has not been configured yet, which happens
    /// during validation; an error diagnostic is pushed only for foreign data.
    pub fn from_any(
        provider_data: Option<Arc<dyn Any + Send + Sync>>,
        diagnostics: &mut Diagnostics,
    ) -> Option<Self> {
        let data = provider_data?;
        match data.downcast_ref::<LeasewebProviderData>() {
            Some(data) => Some(data.clone()),
            None => {
                diagnostics.add_error(
                    "Unexpected Provider Data Type",
                    "expected LeasewebProviderData, please report this issue to the provider developers",
                );
                None
            }
        }
    }
}
