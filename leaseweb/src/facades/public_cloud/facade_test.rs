#[cfg(test)]
mod tests {
    use super::super::validators::{
        InstanceTerminationCapability, InstanceTypeCapability, RegionCapability,
    };
    use super::super::*;
    use crate::api::test_helpers::{
        create_test_client, instance_details_json, instance_json, instance_types_json,
        regions_json, INSTANCE_ID,
    };
    use crate::domain::public_cloud::enums::State;
    use crate::domain::public_cloud::{DomainError, ReasonInstanceCannotBeTerminated};
    use crate::error::Error;
    use crate::models::public_cloud::{
        ContractResourceModel, ImageResourceModel, InstanceResourceModel,
    };
    use mockito::{Matcher, Server};
    use tfplug::context::Context;
    use tfplug::Value;

    fn known(value: &str) -> Value<String> {
        Value::known(value.to_string())
    }

    fn create_plan() -> InstanceResourceModel {
        InstanceResourceModel {
            id: Value::unknown(),
            region: known("eu-west-3"),
            reference: known("reference"),
            image: Value::known(ImageResourceModel {
                id: known("UBUNTU_20_04_64BIT"),
                ..Default::default()
            }),
            instance_type: known("lsw.m5a.4xlarge"),
            root_disk_storage_type: known("CENTRAL"),
            contract: Value::known(ContractResourceModel {
                billing_frequency: Value::known(1),
                term: Value::known(3),
                contract_type: known("MONTHLY"),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    async fn mock_instance_types(server: &mut Server, names: &[&str]) -> mockito::Mock {
        server
            .mock("GET", "/publicCloud/v1/instanceTypes")
            .match_query(Matcher::UrlEncoded("region".into(), "eu-west-3".into()))
            .with_body(instance_types_json(names))
            .create_async()
            .await
    }

    async fn mock_get_instance(server: &mut Server, body: String) -> mockito::Mock {
        server
            .mock("GET", format!("/publicCloud/v1/instances/{}", INSTANCE_ID).as_str())
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_get_instance() {
        let mut server = Server::new_async().await;
        let mock = mock_get_instance(&mut server, instance_details_json()).await;

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        let model = facade
            .get_instance(&Context::new(), INSTANCE_ID)
            .await
            .unwrap();

        assert_eq!(model.id, known(INSTANCE_ID));
        assert_eq!(model.reference, known("my webserver"));
        assert_eq!(model.root_disk_size, Value::known(50));
        assert_eq!(model.started_at, known("2019-09-08 00:00:00 +0000 UTC"));
        assert!(model.market_app_id.is_null());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_instance_rejects_malformed_id() {
        let facade = PublicCloudFacade::new(create_test_client("http://localhost:1"));

        let err = facade
            .get_instance(&Context::new(), "tralala")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Adapter(ref e) if e.domain_error() == Some(&DomainError::InvalidUuid("tralala".to_string()))
        ));
    }

    #[tokio::test]
    async fn test_get_instance_not_found() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", format!("/publicCloud/v1/instances/{}", INSTANCE_ID).as_str())
            .with_status(404)
            .with_body(r#"{"errorCode": "404", "errorMessage": "Resource not found"}"#)
            .create_async()
            .await;

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        let err = facade
            .get_instance(&Context::new(), INSTANCE_ID)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "404: Resource not found");
    }

    #[tokio::test]
    async fn test_create_instance() {
        let mut server = Server::new_async().await;
        let types = mock_instance_types(&mut server, &["lsw.m3.large", "lsw.m5a.4xlarge"]).await;
        let launch = server
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

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        let model = facade
            .create_instance(&Context::new(), &create_plan())
            .await
            .unwrap();

        assert_eq!(model.id, known(INSTANCE_ID));
        assert_eq!(model.state, known("CREATING"));
        assert_eq!(model.ips, Value::known(vec![]));
        types.assert_async().await;
        launch.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_instance_rejects_type_missing_from_region() {
        let mut server = Server::new_async().await;
        mock_instance_types(&mut server, &["lsw.m3.large"]).await;
        let launch = server
            .mock("POST", "/publicCloud/v1/instances")
            .expect(0)
            .create_async()
            .await;

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        let err = facade
            .create_instance(&Context::new(), &create_plan())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("lsw.m5a.4xlarge"));
        launch.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_instance_sends_sparse_body() {
        let mut server = Server::new_async().await;
        let update_types = server
            .mock(
                "GET",
                format!("/publicCloud/v1/instances/{}/instanceTypesUpdate", INSTANCE_ID).as_str(),
            )
            .with_body(instance_types_json(&[]))
            .create_async()
            .await;
        mock_get_instance(&mut server, instance_details_json()).await;
        let update = server
            .mock("PUT", format!("/publicCloud/v1/instances/{}", INSTANCE_ID).as_str())
            .match_body(Matcher::Json(serde_json::json!({
                "rootDiskSize": 65,
                "contractType": "MONTHLY",
                "contractTerm": 3,
                "billingFrequency": 3
            })))
            .with_body(instance_details_json())
            .create_async()
            .await;

        let plan = InstanceResourceModel {
            id: known(INSTANCE_ID),
            root_disk_size: Value::known(65),
            contract: Value::known(ContractResourceModel {
                billing_frequency: Value::known(3),
                term: Value::known(3),
                contract_type: known("MONTHLY"),
                ..Default::default()
            }),
            ..Default::default()
        };

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        let model = facade.update_instance(&Context::new(), &plan).await.unwrap();

        assert_eq!(model.id, known(INSTANCE_ID));
        update_types.assert_async().await;
        update.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_instance_keeps_current_type() {
        let mut server = Server::new_async().await;
        server
            .mock(
                "GET",
                format!("/publicCloud/v1/instances/{}/instanceTypesUpdate", INSTANCE_ID).as_str(),
            )
            .with_body(instance_types_json(&["lsw.m5a.8xlarge"]))
            .create_async()
            .await;
        mock_get_instance(&mut server, instance_details_json()).await;
        let update = server
            .mock("PUT", format!("/publicCloud/v1/instances/{}", INSTANCE_ID).as_str())
            .match_body(Matcher::Json(serde_json::json!({"type": "lsw.m5a.4xlarge"})))
            .with_body(instance_details_json())
            .create_async()
            .await;

        let plan = InstanceResourceModel {
            id: known(INSTANCE_ID),
            instance_type: known("lsw.m5a.4xlarge"),
            ..Default::default()
        };

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        facade.update_instance(&Context::new(), &plan).await.unwrap();

        update.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_instance() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", format!("/publicCloud/v1/instances/{}", INSTANCE_ID).as_str())
            .with_status(204)
            .create_async()
            .await;

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        facade
            .delete_instance(&Context::new(), INSTANCE_ID)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_destroying_instance_is_not_terminable() {
        let mut server = Server::new_async().await;
        mock_get_instance(
            &mut server,
            instance_details_json().replace("\"RUNNING\"", "\"DESTROYING\""),
        )
        .await;

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        let ctx = Context::new();

        assert_eq!(
            facade
                .can_instance_be_terminated(&ctx, INSTANCE_ID)
                .await
                .unwrap(),
            Some(ReasonInstanceCannotBeTerminated::StateIs(State::Destroying))
        );

        let err = facade
            .ensure_instance_can_be_terminated(&ctx, INSTANCE_ID)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InstanceNotTerminable { .. }));
        assert!(err.to_string().contains("DESTROYING"));
    }

    #[tokio::test]
    async fn test_running_instance_is_terminable() {
        let mut server = Server::new_async().await;
        mock_get_instance(&mut server, instance_details_json()).await;

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));

        facade
            .ensure_instance_can_be_terminated(&Context::new(), INSTANCE_ID)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_all_instances() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/publicCloud/v1/instances")
            .match_query(Matcher::Any)
            .with_body(format!(
                r#"{{"instances": [{}], "_metadata": {{"totalCount": 1, "limit": 50, "offset": 0}}}}"#,
                instance_json(INSTANCE_ID, "first")
            ))
            .create_async()
            .await;

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        let model = facade.get_all_instances(&Context::new()).await.unwrap();

        let instances = model.instances.as_known().unwrap();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].reference, known("first"));
        assert!(instances[0].iso.is_null());
    }

    #[tokio::test]
    async fn test_region_capability() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/publicCloud/v1/regions")
            .match_query(Matcher::Any)
            .with_body(regions_json())
            .expect(2)
            .create_async()
            .await;

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        let ctx = Context::new();

        let (exists, available) = facade.does_region_exist(&ctx, "tralala").await.unwrap();
        assert!(!exists);
        assert_eq!(available, vec!["eu-west-3", "us-east-1"]);

        let (exists, _) = facade.does_region_exist(&ctx, "us-east-1").await.unwrap();
        assert!(exists);
    }

    #[tokio::test]
    async fn test_instance_type_capability_for_region() {
        let mut server = Server::new_async().await;
        mock_instance_types(&mut server, &["lsw.m3.large"]).await;

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        let (available, types) = facade
            .is_instance_type_available_for_region(&Context::new(), "lsw.m5a.4xlarge", "eu-west-3")
            .await
            .unwrap();

        assert!(!available);
        assert_eq!(types, vec!["lsw.m3.large"]);
    }

    #[tokio::test]
    async fn test_instance_type_capability_for_instance() {
        let mut server = Server::new_async().await;
        server
            .mock(
                "GET",
                format!("/publicCloud/v1/instances/{}/instanceTypesUpdate", INSTANCE_ID).as_str(),
            )
            .with_body(instance_types_json(&["lsw.m5a.8xlarge"]))
            .create_async()
            .await;
        mock_get_instance(&mut server, instance_details_json()).await;

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        let (allowed, types) = facade
            .can_instance_type_be_used_with_instance(&Context::new(), INSTANCE_ID, "lsw.m5a.4xlarge")
            .await
            .unwrap();

        assert!(allowed);
        assert_eq!(types, vec!["lsw.m5a.4xlarge", "lsw.m5a.8xlarge"]);
    }

    #[tokio::test]
    async fn test_instance_type_details_for_region() {
        let mut server = Server::new_async().await;
        mock_instance_types(&mut server, &["lsw.m3.large"]).await;

        let facade = PublicCloudFacade::new(create_test_client(&server.url()));
        let details = facade
            .get_instance_types_for_region(&Context::new(), "eu-west-3")
            .await
            .unwrap();

        assert_eq!(details[0].name, "lsw.m3.large");
        assert_eq!(details[0].prices.compute.monthly_price, "50");
    }

    #[test]
    fn test_static_catalogs() {
        assert!(PublicCloudFacade::get_image_ids().contains(&"UBUNTU_22_04_64BIT".to_string()));
        assert_eq!(
            PublicCloudFacade::get_root_disk_storage_types(),
            vec!["CENTRAL", "LOCAL"]
        );
        assert_eq!(PublicCloudFacade::get_billing_frequencies(), vec![0, 1, 3, 6, 12]);
        assert_eq!(PublicCloudFacade::get_contract_terms(), vec![0, 1, 3, 6, 12]);
        assert_eq!(PublicCloudFacade::get_contract_types(), vec!["HOURLY", "MONTHLY"]);
        assert_eq!(PublicCloudFacade::get_min_root_disk_size(), 5);
        assert_eq!(PublicCloudFacade::get_max_root_disk_size(), 1000);
        assert!(PublicCloudFacade::get_ssh_key_regular_expression().starts_with('^'));
    }

    #[test]
    fn test_validate_contract_term() {
        assert!(PublicCloudFacade::validate_contract_term(3, "MONTHLY").is_ok());
        assert!(PublicCloudFacade::validate_contract_term(0, "HOURLY").is_ok());
        assert!(matches!(
            PublicCloudFacade::validate_contract_term(0, "MONTHLY"),
            Err(Error::Domain(DomainError::ContractTermCannotBeZero))
        ));
        assert!(matches!(
            PublicCloudFacade::validate_contract_term(3, "HOURLY"),
            Err(Error::Domain(DomainError::ContractTermMustBeZero))
        ));
        assert!(matches!(
            PublicCloudFacade::validate_contract_term(2, "MONTHLY"),
            Err(Error::Domain(DomainError::UnknownEnumValue { .. }))
        ));
    }
}
