//! Public cloud API, `/publicCloud/v1`

mod models;

pub use models::*;

use crate::api::common::{Metadata, PAGE_SIZE};
use crate::api::{ApiError, Client};
use tfplug::context::Context;

const BASE_PATH: &str = "/publicCloud/v1";

pub struct PublicCloudApi<'a> {
    client: &'a Client,
}

impl<'a> PublicCloudApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// GET /instances, every page
    pub async fn list_instances(&self, ctx: &Context) -> Result<Vec<Instance>, ApiError> {
        let path = format!("{}/instances", BASE_PATH);
        self.collect_pages(ctx, &path, &[], |page: InstanceList| {
            (page.instances, page.metadata)
        })
        .await
    }

    /// GET /instances/{id}
    pub async fn get_instance(&self, ctx: &Context, id: &str) -> Result<InstanceDetails, ApiError> {
        let path = format!("{}/instances/{}", BASE_PATH, id);
        self.client.get(ctx, &path).await
    }

    /// POST /instances
    pub async fn launch_instance(
        &self,
        ctx: &Context,
        opts: &LaunchInstanceOpts,
    ) -> Result<Instance, ApiError> {
        let path = format!("{}/instances", BASE_PATH);
        self.client.post(ctx, &path, opts).await
    }

    /// PUT /instances/{id}
    pub async fn update_instance(
        &self,
        ctx: &Context,
        id: &str,
        opts: &UpdateInstanceOpts,
    ) -> Result<InstanceDetails, ApiError> {
        let path = format!("{}/instances/{}", BASE_PATH, id);
        self.client.put(ctx, &path, opts).await
    }

    /// DELETE /instances/{id}
    pub async fn terminate_instance(&self, ctx: &Context, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/instances/{}", BASE_PATH, id);
        self.client.delete(ctx, &path).await
    }

    /// GET /instanceTypes?region={region}, every page
    pub async fn get_instance_types(
        &self,
        ctx: &Context,
        region: &str,
    ) -> Result<Vec<InstanceType>, ApiError> {
        let path = format!("{}/instanceTypes", BASE_PATH);
        self.collect_pages(
            ctx,
            &path,
            &[("region", region.to_string())],
            |page: InstanceTypeList| (page.instance_types, page.metadata),
        )
        .await
    }

    /// GET /instances/{id}/instanceTypesUpdate
    pub async fn get_available_instance_types_for_update(
        &self,
        ctx: &Context,
        id: &str,
    ) -> Result<Vec<InstanceType>, ApiError> {
        let path = format!("{}/instances/{}/instanceTypesUpdate", BASE_PATH, id);
        let list: InstanceTypeList = self.client.get(ctx, &path).await?;
        Ok(list.instance_types)
    }

    /// GET /regions, every page
    pub async fn get_regions(&self, ctx: &Context) -> Result<Vec<Region>, ApiError> {
        let path = format!("{}/regions", BASE_PATH);
        self.collect_pages(ctx, &path, &[], |page: RegionList| {
            (page.regions, page.metadata)
        })
        .await
    }

    /// Walks `limit`/`offset` pages until `_metadata.totalCount` items were read
    async fn collect_pages<P, T, F>(
        &self,
        ctx: &Context,
        path: &str,
        query: &[(&str, String)],
        split: F,
    ) -> Result<Vec<T>, ApiError>
    where
        P: serde::de::DeserializeOwned,
        F: Fn(P) -> (Vec<T>, Metadata),
    {
        let mut items = Vec::new();
        let mut offset = 0;

        loop {
            let mut page_query = query.to_vec();
            page_query.push(("limit", PAGE_SIZE.to_string()));
            page_query.push(("offset", offset.to_string()));

            let page: P = self.client.get_with_query(ctx, path, &page_query).await?;
            let (page_items, metadata) = split(page);
            let received = page_items.len();
            items.extend(page_items);

            match metadata.next_offset(offset, received) {
                Some(next) => offset = next,
                None => break,
            }
        }

        Ok(items)
    }
}

#[cfg(test)]
#[path = "./public_cloud_test.rs"]
mod public_cloud_test;
