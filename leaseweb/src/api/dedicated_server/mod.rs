//! Dedicated server API, `/bareMetals/v2/servers`

mod models;

pub use models::*;

use crate::api::common::PAGE_SIZE;
use crate::api::{ApiError, Client};
use tfplug::context::Context;

const BASE_PATH: &str = "/bareMetals/v2/servers";

pub struct DedicatedServerApi<'a> {
    client: &'a Client,
}

impl<'a> DedicatedServerApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// GET /servers, every page matching the filters
    pub async fn list_servers(
        &self,
        ctx: &Context,
        opts: &ListServersOpts,
    ) -> Result<Vec<Server>, ApiError> {
        let mut filters = Vec::new();
        if let Some(reference) = &opts.reference {
            filters.push(("reference", reference.clone()));
        }
        if let Some(site) = &opts.site {
            filters.push(("site", site.clone()));
        }

        let mut servers = Vec::new();
        let mut offset = 0;
        loop {
            let mut query = filters.clone();
            query.push(("limit", PAGE_SIZE.to_string()));
            query.push(("offset", offset.to_string()));

            let page: ServerList = self.client.get_with_query(ctx, BASE_PATH, &query).await?;
            let received = page.servers.len();
            servers.extend(page.servers);

            match page.metadata.next_offset(offset, received) {
                Some(next) => offset = next,
                None => break,
            }
        }

        Ok(servers)
    }

    /// GET /servers/{id}
    pub async fn get_server(&self, ctx: &Context, id: &str) -> Result<Server, ApiError> {
        let path = format!("{}/{}", BASE_PATH, id);
        self.client.get(ctx, &path).await
    }

    /// PUT /servers/{id}
    pub async fn update_server_reference(
        &self,
        ctx: &Context,
        id: &str,
        reference: &str,
    ) -> Result<(), ApiError> {
        let path = format!("{}/{}", BASE_PATH, id);
        let opts = UpdateServerReferenceOpts {
            reference: reference.to_string(),
        };
        self.client.put_action(ctx, &path, &opts).await
    }

    /// GET /servers/{id}/powerInfo
    pub async fn get_server_power_status(
        &self,
        ctx: &Context,
        id: &str,
    ) -> Result<PowerInfo, ApiError> {
        let path = format!("{}/{}/powerInfo", BASE_PATH, id);
        self.client.get(ctx, &path).await
    }

    /// POST /servers/{id}/powerOn
    pub async fn power_server_on(&self, ctx: &Context, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}/powerOn", BASE_PATH, id);
        self.client.post_action(ctx, &path, &serde_json::json!({})).await
    }

    /// POST /servers/{id}/powerOff
    pub async fn power_server_off(&self, ctx: &Context, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}/powerOff", BASE_PATH, id);
        self.client.post_action(ctx, &path, &serde_json::json!({})).await
    }

    /// GET /servers/{id}/ips/{ip}
    pub async fn get_server_ip(&self, ctx: &Context, id: &str, ip: &str) -> Result<Ip, ApiError> {
        let path = format!("{}/{}/ips/{}", BASE_PATH, id, ip);
        self.client.get(ctx, &path).await
    }

    /// PUT /servers/{id}/ips/{ip}
    pub async fn update_ip_profile(
        &self,
        ctx: &Context,
        id: &str,
        ip: &str,
        opts: &UpdateIpProfileOpts,
    ) -> Result<Ip, ApiError> {
        let path = format!("{}/{}/ips/{}", BASE_PATH, id, ip);
        self.client.put(ctx, &path, opts).await
    }

    /// POST /servers/{id}/ips/{ip}/null
    pub async fn null_ip_route(&self, ctx: &Context, id: &str, ip: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}/ips/{}/null", BASE_PATH, id, ip);
        self.client
            .post_action(ctx, &path, &NullRouteOpts::default())
            .await
    }

    /// POST /servers/{id}/ips/{ip}/unnull
    pub async fn remove_null_ip_route(
        &self,
        ctx: &Context,
        id: &str,
        ip: &str,
    ) -> Result<(), ApiError> {
        let path = format!("{}/{}/ips/{}/unnull", BASE_PATH, id, ip);
        self.client
            .post_action(ctx, &path, &NullRouteOpts::default())
            .await
    }

    /// GET /servers/{id}/leases, `None` when no reservation exists
    pub async fn get_dhcp_reservation(
        &self,
        ctx: &Context,
        id: &str,
    ) -> Result<Option<DhcpReservation>, ApiError> {
        let path = format!("{}/{}/leases", BASE_PATH, id);
        let list: DhcpReservationList = self.client.get(ctx, &path).await?;
        Ok(list.leases.into_iter().next())
    }

    /// POST /servers/{id}/leases
    pub async fn create_server_dhcp_reservation(
        &self,
        ctx: &Context,
        id: &str,
        opts: &CreateDhcpReservationOpts,
    ) -> Result<(), ApiError> {
        let path = format!("{}/{}/leases", BASE_PATH, id);
        self.client.post_action(ctx, &path, opts).await
    }

    /// DELETE /servers/{id}/leases
    pub async fn delete_server_dhcp_reservation(
        &self,
        ctx: &Context,
        id: &str,
    ) -> Result<(), ApiError> {
        let path = format!("{}/{}/leases", BASE_PATH, id);
        self.client.delete(ctx, &path).await
    }

    /// GET /servers/{id}/networkInterfaces/public
    pub async fn get_network_interface(
        &self,
        ctx: &Context,
        id: &str,
    ) -> Result<NetworkInterface, ApiError> {
        let path = format!("{}/{}/networkInterfaces/public", BASE_PATH, id);
        self.client.get(ctx, &path).await
    }

    /// POST /servers/{id}/networkInterfaces/public/open
    pub async fn open_network_interface(&self, ctx: &Context, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}/networkInterfaces/public/open", BASE_PATH, id);
        self.client.post_action(ctx, &path, &serde_json::json!({})).await
    }

    /// POST /servers/{id}/networkInterfaces/public/close
    pub async fn close_network_interface(&self, ctx: &Context, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/{}/networkInterfaces/public/close", BASE_PATH, id);
        self.client.post_action(ctx, &path, &serde_json::json!({})).await
    }
}

#[cfg(test)]
#[path = "./dedicated_server_test.rs"]
mod dedicated_server_test;
