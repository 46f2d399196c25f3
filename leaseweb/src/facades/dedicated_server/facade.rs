use crate::api::dedicated_server::{
    CreateDhcpReservationOpts, ListServersOpts, Location, Server, UpdateIpProfileOpts,
};
use crate::api::Client;
use crate::error::{Error, Result};
use crate::models::dedicated_server::{
    DedicatedServerResourceModel, DedicatedServersDataSourceModel, LocationModel,
};
use tfplug::context::Context;
use tfplug::Value;

/// Aggregates the per-concern dedicated server endpoints into one model
#[derive(Clone)]
pub struct DedicatedServerFacade {
    client: Client,
}

impl DedicatedServerFacade {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Reads server, power status, public interface, main IP and DHCP lease
    pub async fn get_server(&self, ctx: &Context, id: &str) -> Result<DedicatedServerResourceModel> {
        let api = self.client.dedicated_servers();

        tracing::debug!(id = %id, "Reading dedicated server");
        let server = api.get_server(ctx, id).await?;
        let power_info = api.get_server_power_status(ctx, id).await?;

        let public_network_interface_opened = match api.get_network_interface(ctx, id).await {
            Ok(interface) => Value::known(interface.is_open()),
            Err(e) if e.is_not_found() => Value::null(),
            Err(e) => return Err(e.into()),
        };

        let (reverse_lookup, public_ip_null_routed) = match server.public_ip() {
            Some(ip) => {
                let ip = api.get_server_ip(ctx, id, ip).await?;
                (
                    Value::from_option(ip.reverse_lookup),
                    Value::known(ip.null_routed),
                )
            }
            None => (Value::null(), Value::null()),
        };

        let dhcp_lease = api
            .get_dhcp_reservation(ctx, id)
            .await?
            .and_then(|lease| lease.bootfile().map(str::to_string));

        let mut model = adapt_server(&server);
        model.powered_on = Value::known(power_info.is_powered_on());
        model.public_network_interface_opened = public_network_interface_opened;
        model.reverse_lookup = reverse_lookup;
        model.public_ip_null_routed = public_ip_null_routed;
        model.dhcp_lease = Value::from_option(dhcp_lease);
        Ok(model)
    }

    /// Ids of every server matching the known filters of `filter`
    pub async fn list_server_ids(
        &self,
        ctx: &Context,
        filter: &DedicatedServersDataSourceModel,
    ) -> Result<DedicatedServersDataSourceModel> {
        let opts = ListServersOpts {
            reference: non_empty(&filter.reference),
            site: non_empty(&filter.site),
        };

        tracing::debug!(reference = ?opts.reference, site = ?opts.site, "Listing dedicated servers");
        let servers = self
            .client
            .dedicated_servers()
            .list_servers(ctx, &opts)
            .await?;

        Ok(DedicatedServersDataSourceModel {
            reference: filter.reference.clone(),
            site: filter.site.clone(),
            ids: Value::known(servers.into_iter().map(|s| s.id).collect()),
        })
    }

    /// Applies every known setting of `desired` that differs from `current`, then reads back
    ///
    /// A null or empty `dhcp_lease` removes the reservation.
    pub async fn apply(
        &self,
        ctx: &Context,
        id: &str,
        desired: &DedicatedServerResourceModel,
        current: &DedicatedServerResourceModel,
    ) -> Result<DedicatedServerResourceModel> {
        let api = self.client.dedicated_servers();

        if let Some(reference) = changed(&desired.reference, &current.reference) {
            tracing::debug!(id = %id, "Updating dedicated server reference");
            api.update_server_reference(ctx, id, reference).await?;
        }

        if let Some(reverse_lookup) = changed(&desired.reverse_lookup, &current.reverse_lookup) {
            let ip = public_ip(id, current)?;
            let opts = UpdateIpProfileOpts {
                reverse_lookup: Some(reverse_lookup.clone()),
                ..Default::default()
            };
            api.update_ip_profile(ctx, id, ip, &opts).await?;
        }

        if let Some(null_routed) =
            changed(&desired.public_ip_null_routed, &current.public_ip_null_routed)
        {
            let ip = public_ip(id, current)?;
            if *null_routed {
                api.null_ip_route(ctx, id, ip).await?;
            } else {
                api.remove_null_ip_route(ctx, id, ip).await?;
            }
        }

        let current_lease = non_empty(&current.dhcp_lease);
        let desired_lease = match &desired.dhcp_lease {
            Value::Unknown => current_lease.clone(),
            lease => non_empty(lease),
        };
        if desired_lease != current_lease {
            if current_lease.is_some() {
                api.delete_server_dhcp_reservation(ctx, id).await?;
            }
            if let Some(bootfile) = desired_lease {
                tracing::debug!(id = %id, bootfile = %bootfile, "Creating DHCP reservation");
                let opts = CreateDhcpReservationOpts {
                    bootfile,
                    hostname: None,
                };
                api.create_server_dhcp_reservation(ctx, id, &opts).await?;
            }
        }

        if let Some(powered_on) = changed(&desired.powered_on, &current.powered_on) {
            tracing::debug!(id = %id, powered_on = %powered_on, "Switching dedicated server power");
            if *powered_on {
                api.power_server_on(ctx, id).await?;
            } else {
                api.power_server_off(ctx, id).await?;
            }
        }

        if let Some(opened) = changed(
            &desired.public_network_interface_opened,
            &current.public_network_interface_opened,
        ) {
            if *opened {
                api.open_network_interface(ctx, id).await?;
            } else {
                api.close_network_interface(ctx, id).await?;
            }
        }

        self.get_server(ctx, id).await
    }
}

/// Attributes carried by the server record itself
fn adapt_server(server: &Server) -> DedicatedServerResourceModel {
    DedicatedServerResourceModel {
        id: Value::known(server.id.clone()),
        reference: Value::from_option(server.reference().map(str::to_string)),
        public_ip: Value::from_option(server.public_ip().map(str::to_string)),
        remote_management_ip: Value::from_option(
            server.remote_management_ip().map(str::to_string),
        ),
        internal_mac: Value::from_option(server.internal_mac().map(str::to_string)),
        location: Value::from_option(server.location.as_ref().map(adapt_location)),
        ..Default::default()
    }
}

fn adapt_location(location: &Location) -> LocationModel {
    LocationModel {
        rack: Value::from_option(location.rack.clone()),
        site: Value::from_option(location.site.clone()),
        suite: Value::from_option(location.suite.clone()),
        unit: Value::from_option(location.unit.clone()),
    }
}

fn changed<'a, T: PartialEq>(desired: &'a Value<T>, current: &Value<T>) -> Option<&'a T> {
    match (desired.as_known(), current.as_known()) {
        (Some(desired), Some(current)) if desired == current => None,
        (desired, _) => desired,
    }
}

fn non_empty(value: &Value<String>) -> Option<String> {
    value.as_known().filter(|v| !v.is_empty()).cloned()
}

fn public_ip<'a>(id: &str, current: &'a DedicatedServerResourceModel) -> Result<&'a str> {
    current
        .public_ip
        .as_known()
        .map(String::as_str)
        .ok_or_else(|| Error::Configuration(format!("server {} has no public ip", id)))
}
