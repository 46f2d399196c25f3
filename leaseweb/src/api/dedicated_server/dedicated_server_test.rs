#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::api::test_helpers::{create_test_client, server_json, SERVER_ID};
    use mockito::{Matcher, Server as MockServer};
    use tfplug::context::Context;

    #[tokio::test]
    async fn test_get_server() {
        let mut server = MockServer::new_async().await;
        let _m = server
            .mock("GET", "/bareMetals/v2/servers/12345")
            .with_body(server_json("database.server"))
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let result = client
            .dedicated_servers()
            .get_server(&Context::new(), SERVER_ID)
            .await
            .unwrap();

        assert_eq!(result.reference(), Some("database.server"));
        assert_eq!(result.public_ip(), Some("95.211.162.0"));
        assert_eq!(result.remote_management_ip(), Some("10.22.192.1"));
        assert_eq!(result.internal_mac(), Some("AA:BB:CC:DD:EE:FF"));
        assert_eq!(
            result.location.unwrap().site.as_deref(),
            Some("AMS-01")
        );
    }

    #[tokio::test]
    async fn test_list_servers_with_filters() {
        let mut server = MockServer::new_async().await;
        let mock = server
            .mock("GET", "/bareMetals/v2/servers")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("reference".into(), "web".into()),
                Matcher::UrlEncoded("site".into(), "AMS-01".into()),
                Matcher::UrlEncoded("offset".into(), "0".into()),
            ]))
            .with_body(format!(
                r#"{{"servers": [{}], "_metadata": {{"totalCount": 1, "limit": 50, "offset": 0}}}}"#,
                server_json("web")
            ))
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let servers = client
            .dedicated_servers()
            .list_servers(
                &Context::new(),
                &ListServersOpts {
                    reference: Some("web".to_string()),
                    site: Some("AMS-01".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(servers.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_server_reference() {
        let mut server = MockServer::new_async().await;
        let mock = server
            .mock("PUT", "/bareMetals/v2/servers/12345")
            .match_body(Matcher::Json(serde_json::json!({"reference": "new"})))
            .with_status(204)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        client
            .dedicated_servers()
            .update_server_reference(&Context::new(), SERVER_ID, "new")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_power_status() {
        let mut server = MockServer::new_async().await;
        let _m = server
            .mock("GET", "/bareMetals/v2/servers/12345/powerInfo")
            .with_body(r#"{"ipmi": {"status": "off"}, "pdu": {"status": "on"}}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let power = client
            .dedicated_servers()
            .get_server_power_status(&Context::new(), SERVER_ID)
            .await
            .unwrap();

        assert!(!power.is_powered_on());
    }

    #[tokio::test]
    async fn test_power_actions() {
        let mut server = MockServer::new_async().await;
        let on = server
            .mock("POST", "/bareMetals/v2/servers/12345/powerOn")
            .with_status(202)
            .create_async()
            .await;
        let off = server
            .mock("POST", "/bareMetals/v2/servers/12345/powerOff")
            .with_status(202)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let api = client.dedicated_servers();
        api.power_server_on(&Context::new(), SERVER_ID).await.unwrap();
        api.power_server_off(&Context::new(), SERVER_ID).await.unwrap();

        on.assert_async().await;
        off.assert_async().await;
    }

    #[tokio::test]
    async fn test_ip_operations() {
        let mut server = MockServer::new_async().await;
        let update = server
            .mock("PUT", "/bareMetals/v2/servers/12345/ips/95.211.162.0")
            .match_body(Matcher::Json(
                serde_json::json!({"reverseLookup": "example.com"}),
            ))
            .with_body(r#"{"ip": "95.211.162.0/26", "nullRouted": false, "reverseLookup": "example.com"}"#)
            .create_async()
            .await;
        let null = server
            .mock("POST", "/bareMetals/v2/servers/12345/ips/95.211.162.0/null")
            .with_status(202)
            .create_async()
            .await;
        let unnull = server
            .mock("POST", "/bareMetals/v2/servers/12345/ips/95.211.162.0/unnull")
            .with_status(202)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let api = client.dedicated_servers();
        let ctx = Context::new();

        let ip = api
            .update_ip_profile(
                &ctx,
                SERVER_ID,
                "95.211.162.0",
                &UpdateIpProfileOpts {
                    reverse_lookup: Some("example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(ip.reverse_lookup.as_deref(), Some("example.com"));

        api.null_ip_route(&ctx, SERVER_ID, "95.211.162.0")
            .await
            .unwrap();
        api.remove_null_ip_route(&ctx, SERVER_ID, "95.211.162.0")
            .await
            .unwrap();

        update.assert_async().await;
        null.assert_async().await;
        unnull.assert_async().await;
    }

    #[tokio::test]
    async fn test_dhcp_reservation_lifecycle() {
        let mut server = MockServer::new_async().await;
        let get = server
            .mock("GET", "/bareMetals/v2/servers/12345/leases")
            .with_body(
                r#"{"leases": [{"ip": "95.211.162.0", "mac": "AA:AC:CC:88:EE:E4", "options": [
                    {"name": "bootfile", "value": "http://example.com/boot.ipxe"},
                    {"name": "hostname", "value": "web01"}
                ]}], "_metadata": {"totalCount": 1}}"#,
            )
            .create_async()
            .await;
        let create = server
            .mock("POST", "/bareMetals/v2/servers/12345/leases")
            .match_body(Matcher::Json(
                serde_json::json!({"bootfile": "http://example.com/boot.ipxe"}),
            ))
            .with_status(204)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/bareMetals/v2/servers/12345/leases")
            .with_status(204)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let api = client.dedicated_servers();
        let ctx = Context::new();

        let lease = api.get_dhcp_reservation(&ctx, SERVER_ID).await.unwrap();
        assert_eq!(
            lease.unwrap().bootfile(),
            Some("http://example.com/boot.ipxe")
        );

        api.create_server_dhcp_reservation(
            &ctx,
            SERVER_ID,
            &CreateDhcpReservationOpts {
                bootfile: "http://example.com/boot.ipxe".to_string(),
                hostname: None,
            },
        )
        .await
        .unwrap();
        api.delete_server_dhcp_reservation(&ctx, SERVER_ID)
            .await
            .unwrap();

        get.assert_async().await;
        create.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_network_interface() {
        let mut server = MockServer::new_async().await;
        let _get = server
            .mock("GET", "/bareMetals/v2/servers/12345/networkInterfaces/public")
            .with_body(r#"{"linkSpeed": "100Mbps", "operStatus": "OPEN", "status": "OPEN", "type": "PUBLIC"}"#)
            .create_async()
            .await;
        let close = server
            .mock("POST", "/bareMetals/v2/servers/12345/networkInterfaces/public/close")
            .with_status(204)
            .create_async()
            .await;
        let open = server
            .mock("POST", "/bareMetals/v2/servers/12345/networkInterfaces/public/open")
            .with_status(204)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let api = client.dedicated_servers();
        let ctx = Context::new();

        assert!(api
            .get_network_interface(&ctx, SERVER_ID)
            .await
            .unwrap()
            .is_open());
        api.close_network_interface(&ctx, SERVER_ID).await.unwrap();
        api.open_network_interface(&ctx, SERVER_ID).await.unwrap();

        close.assert_async().await;
        open.assert_async().await;
    }

    #[test]
    fn test_strip_prefix_length() {
        assert_eq!(strip_prefix_length("10.0.0.1/27"), "10.0.0.1");
        assert_eq!(strip_prefix_length("10.0.0.1"), "10.0.0.1");
    }
}
