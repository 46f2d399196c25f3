#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::api::test_helpers::{
        create_test_client, instance_details_json, instance_json, INSTANCE_ID, TEST_TOKEN,
    };
    use crate::api::AUTH_HEADER;
    use mockito::{Matcher, Server};
    use tfplug::context::Context;

    #[tokio::test]
    async fn test_get_instance() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", format!("/publicCloud/v1/instances/{}", INSTANCE_ID).as_str())
            .match_header(AUTH_HEADER, TEST_TOKEN)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(instance_details_json())
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let instance = client
            .public_cloud()
            .get_instance(&Context::new(), INSTANCE_ID)
            .await
            .unwrap();

        assert_eq!(instance.id, INSTANCE_ID);
        assert_eq!(instance.instance_type, "lsw.m5a.4xlarge");
        assert_eq!(instance.contract.term, 3);
        assert!(instance.contract.ends_at.is_none());
        assert!(instance.contract.renewals_at.is_some());
        assert!(instance.iso.is_none());
        assert_eq!(instance.volume.as_ref().unwrap().size, 50.0);
        assert_eq!(
            instance.ips[0].ddos.as_ref().unwrap().protection_type,
            "ADVANCED"
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_instances_walks_pages() {
        let mut server = Server::new_async().await;
        let first_page = format!(
            r#"{{"instances": [{}], "_metadata": {{"totalCount": 2, "limit": 1, "offset": 0}}}}"#,
            instance_json("11111111-1111-1111-1111-111111111111", "first")
        );
        let second_page = format!(
            r#"{{"instances": [{}], "_metadata": {{"totalCount": 2, "limit": 1, "offset": 1}}}}"#,
            instance_json("22222222-2222-2222-2222-222222222222", "second")
        );

        let first = server
            .mock("GET", "/publicCloud/v1/instances")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "50".into()),
                Matcher::UrlEncoded("offset".into(), "0".into()),
            ]))
            .with_body(first_page)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/publicCloud/v1/instances")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "50".into()),
                Matcher::UrlEncoded("offset".into(), "1".into()),
            ]))
            .with_body(second_page)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let instances = client
            .public_cloud()
            .list_instances(&Context::new())
            .await
            .unwrap();

        let references: Vec<_> = instances
            .iter()
            .map(|i| i.reference.clone().unwrap())
            .collect();
        assert_eq!(references, vec!["first", "second"]);
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_instances_without_echoed_offset() {
        let mut server = Server::new_async().await;
        let first = server
            .mock("GET", "/publicCloud/v1/instances")
            .match_query(Matcher::UrlEncoded("offset".into(), "0".into()))
            .with_body(format!(
                r#"{{"instances": [{}], "_metadata": {{"totalCount": 2, "limit": 1}}}}"#,
                instance_json("11111111-1111-1111-1111-111111111111", "first")
            ))
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/publicCloud/v1/instances")
            .match_query(Matcher::UrlEncoded("offset".into(), "1".into()))
            .with_body(format!(
                r#"{{"instances": [{}], "_metadata": {{"totalCount": 2, "limit": 1}}}}"#,
                instance_json("22222222-2222-2222-2222-222222222222", "second")
            ))
            .expect(1)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let instances = client
            .public_cloud()
            .list_instances(&Context::new())
            .await
            .unwrap();

        assert_eq!(instances.len(), 2);
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_launch_instance_sends_opts() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/publicCloud/v1/instances")
            .match_body(Matcher::Json(serde_json::json!({
                "region": "eu-west-3",
                "type": "lsw.m5a.4xlarge",
                "imageId": "UBUNTU_20_04_64BIT",
                "contractType": "MONTHLY",
                "contractTerm": 3,
                "billingFrequency": 1,
                "rootDiskStorageType": "CENTRAL",
                "reference": "reference"
            })))
            .with_status(201)
            .with_body(instance_json(INSTANCE_ID, "reference"))
            .create_async()
            .await;

        let opts = LaunchInstanceOpts {
            region: "eu-west-3".to_string(),
            instance_type: "lsw.m5a.4xlarge".to_string(),
            image_id: "UBUNTU_20_04_64BIT".to_string(),
            contract_type: "MONTHLY".to_string(),
            contract_term: 3,
            billing_frequency: 1,
            root_disk_storage_type: "CENTRAL".to_string(),
            reference: Some("reference".to_string()),
            ..Default::default()
        };

        let client = create_test_client(&server.url());
        let instance = client
            .public_cloud()
            .launch_instance(&Context::new(), &opts)
            .await
            .unwrap();

        assert_eq!(instance.state, "CREATING");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_instance_omits_absent_fields() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", format!("/publicCloud/v1/instances/{}", INSTANCE_ID).as_str())
            .match_body(Matcher::Json(serde_json::json!({"rootDiskSize": 65})))
            .with_body(instance_details_json())
            .create_async()
            .await;

        let opts = UpdateInstanceOpts {
            root_disk_size: Some(65),
            ..Default::default()
        };

        let client = create_test_client(&server.url());
        client
            .public_cloud()
            .update_instance(&Context::new(), INSTANCE_ID, &opts)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_terminate_instance() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", format!("/publicCloud/v1/instances/{}", INSTANCE_ID).as_str())
            .with_status(204)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        client
            .public_cloud()
            .terminate_instance(&Context::new(), INSTANCE_ID)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_instance_types_filters_by_region() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/publicCloud/v1/instanceTypes")
            .match_query(Matcher::UrlEncoded("region".into(), "eu-west-3".into()))
            .with_body(
                r#"{
                "instanceTypes": [{
                    "name": "lsw.m5a.4xlarge",
                    "resources": {
                        "cpu": {"value": 16, "unit": "vCPU"},
                        "memory": {"value": 64, "unit": "GiB"},
                        "publicNetworkSpeed": {"value": 10000, "unit": "Gbps"},
                        "privateNetworkSpeed": {"value": 10000, "unit": "Gbps"}
                    },
                    "prices": {
                        "currency": "EUR",
                        "currencySymbol": "€",
                        "compute": {"hourlyPrice": "0.1", "monthlyPrice": "50"},
                        "storage": {
                            "local": {"hourlyPrice": "0", "monthlyPrice": "0"},
                            "central": {"hourlyPrice": "0", "monthlyPrice": "0"}
                        }
                    },
                    "storageTypes": ["CENTRAL"]
                }],
                "_metadata": {"totalCount": 1, "limit": 50, "offset": 0}
            }"#,
            )
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let types = client
            .public_cloud()
            .get_instance_types(&Context::new(), "eu-west-3")
            .await
            .unwrap();

        assert_eq!(types.len(), 1);
        assert_eq!(types[0].name, "lsw.m5a.4xlarge");
        assert_eq!(types[0].prices.currency_symbol, "€");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_regions() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/publicCloud/v1/regions")
            .match_query(Matcher::Any)
            .with_body(
                r#"{
                "regions": [
                    {"name": "eu-west-3", "location": "Amsterdam"},
                    {"name": "us-east-1", "location": "Washington"}
                ],
                "_metadata": {"totalCount": 2, "limit": 50, "offset": 0}
            }"#,
            )
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let regions = client
            .public_cloud()
            .get_regions(&Context::new())
            .await
            .unwrap();

        assert_eq!(regions[1].location, "Washington");
    }

    #[tokio::test]
    async fn test_not_found_is_reported() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", format!("/publicCloud/v1/instances/{}", INSTANCE_ID).as_str())
            .with_status(404)
            .with_body(r#"{"errorCode":"404","errorMessage":"Resource not found"}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let err = client
            .public_cloud()
            .get_instance(&Context::new(), INSTANCE_ID)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "404: Resource not found");
    }
}
