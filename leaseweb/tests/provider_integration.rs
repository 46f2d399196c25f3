use leaseweb::models::public_cloud::{ContractResourceModel, ImageResourceModel, InstanceResourceModel};
use leaseweb::LeasewebProvider;
use mockito::{Matcher, Server};
use tfplug::context::Context;
use tfplug::data_source::{
    ConfigureDataSourceRequest, DataSource, DataSourceWithConfigure, ReadDataSourceRequest,
};
use tfplug::provider::{ConfigureProviderRequest, Provider};
use tfplug::resource::{
    ConfigureResourceRequest, CreateResourceRequest, DeleteResourceRequest, ReadResourceRequest,
    Resource, ResourceWithConfigure,
};
use tfplug::types::{AttributePath, Dynamic, DynamicValue};
use tfplug::value::{FromDynamic, ToDynamic};
use tfplug::Value;

const TOKEN: &str = "integration-token";
const INSTANCE_ID: &str = "5d7f8262-d77f-4476-8da8-6a84f8f2ae8d";
const INSTANCE_PATH: &str = "/publicCloud/v1/instances/5d7f8262-d77f-4476-8da8-6a84f8f2ae8d";

fn provider_block(server: &Server) -> DynamicValue {
    let mut config = DynamicValue::object();
    for (name, value) in [
        ("token", TOKEN.to_string()),
        ("host", server.host_with_port()),
        ("scheme", "http".to_string()),
    ] {
        config
            .set_string(&AttributePath::new(name), value)
            .unwrap();
    }
    config
}

fn configure_request(server: &Server) -> ConfigureProviderRequest {
    ConfigureProviderRequest {
        terraform_version: "1.9.0".to_string(),
        config: provider_block(server),
    }
}

const RESOURCES_JSON: &str = r#"{
    "cpu": {"value": 1, "unit": "vCPU"},
    "memory": {"value": 4, "unit": "GiB"},
    "publicNetworkSpeed": {"value": 1000, "unit": "Mbps"},
    "privateNetworkSpeed": {"value": 1000, "unit": "Mbps"}
}"#;

fn instance_body(state: &str) -> String {
    format!(
        r#"{{
        "id": "{INSTANCE_ID}",
        "type": "lsw.m3.large",
        "resources": {RESOURCES_JSON},
        "region": "eu-west-3",
        "reference": "integration",
        "image": {{"id": "DEBIAN_12_64BIT", "name": "Debian 12 (x86_64)", "family": "linux", "flavour": "debian", "custom": false}},
        "state": "{state}",
        "rootDiskSize": 5,
        "rootDiskStorageType": "LOCAL",
        "ips": [{{"ip": "10.0.0.1", "prefixLength": "32", "version": 4, "nullRouted": false, "mainIp": true, "networkType": "PUBLIC"}}],
        "startedAt": null,
        "contract": {{"billingFrequency": 0, "term": 0, "type": "HOURLY", "state": "ACTIVE"}}
    }}"#
    )
}

fn planned_instance() -> InstanceResourceModel {
    InstanceResourceModel {
        id: Value::unknown(),
        region: Value::known("eu-west-3".to_string()),
        reference: Value::known("integration".to_string()),
        image: Value::known(ImageResourceModel {
            id: Value::known("DEBIAN_12_64BIT".to_string()),
            name: Value::unknown(),
            family: Value::unknown(),
            flavour: Value::unknown(),
            custom: Value::unknown(),
        }),
        state: Value::unknown(),
        instance_type: Value::known("lsw.m3.large".to_string()),
        root_disk_size: Value::unknown(),
        root_disk_storage_type: Value::known("LOCAL".to_string()),
        ips: Value::unknown(),
        started_at: Value::unknown(),
        contract: Value::known(ContractResourceModel {
            billing_frequency: Value::known(0),
            term: Value::known(0),
            contract_type: Value::known("HOURLY".to_string()),
            ends_at: Value::unknown(),
            state: Value::unknown(),
        }),
        market_app_id: Value::unknown(),
        ssh_key: Value::null(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn public_cloud_instance_lifecycle_with_mock_server() {
    tfplug::try_init_logging("leaseweb=debug");
    let mut server = Server::new_async().await;

    let _types = server
        .mock("GET", "/publicCloud/v1/instanceTypes")
        .match_header("X-LSW-Auth", TOKEN)
        .match_query(Matcher::UrlEncoded("region".into(), "eu-west-3".into()))
        .with_body(format!(
            r#"{{"instanceTypes": [{{
                "name": "lsw.m3.large",
                "resources": {RESOURCES_JSON},
                "prices": {{
                    "currency": "EUR",
                    "currencySymbol": "€",
                    "compute": {{"hourlyPrice": "0.02", "monthlyPrice": "12"}},
                    "storage": {{
                        "local": {{"hourlyPrice": "0", "monthlyPrice": "0"}},
                        "central": {{"hourlyPrice": "0", "monthlyPrice": "0"}}
                    }}
                }},
                "storageTypes": ["LOCAL", "CENTRAL"]
            }}], "_metadata": {{"totalCount": 1, "limit": 50, "offset": 0}}}}"#
        ))
        .create_async()
        .await;
    let launch = server
        .mock("POST", "/publicCloud/v1/instances")
        .match_header("X-LSW-Auth", TOKEN)
        .match_body(Matcher::PartialJson(serde_json::json!({
            "imageId": "DEBIAN_12_64BIT",
            "contractType": "HOURLY",
            "rootDiskStorageType": "LOCAL"
        })))
        .with_status(201)
        .with_body(instance_body("CREATING"))
        .create_async()
        .await;
    let _get = server
        .mock("GET", INSTANCE_PATH)
        .with_body(instance_body("RUNNING"))
        .create_async()
        .await;
    let terminate = server
        .mock("DELETE", INSTANCE_PATH)
        .with_status(204)
        .create_async()
        .await;

    let mut provider = LeasewebProvider::new();
    let configured = provider
        .configure(Context::new(), configure_request(&server))
        .await;
    assert!(configured.diagnostics.is_empty(), "{}", configured.diagnostics);

    let factories = provider.resources();
    let mut resource = factories["leaseweb_public_cloud_instance"]();
    let response = resource
        .configure(
            Context::new(),
            ConfigureResourceRequest {
                provider_data: configured.provider_data.clone(),
            },
        )
        .await;
    assert!(response.diagnostics.is_empty());

    let planned = DynamicValue::new(planned_instance().to_dynamic());
    let created = resource
        .create(
            Context::new(),
            CreateResourceRequest {
                type_name: "leaseweb_public_cloud_instance".to_string(),
                planned_state: planned.clone(),
                config: planned,
            },
        )
        .await;
    assert!(created.diagnostics.is_empty(), "{}", created.diagnostics);
    assert_eq!(
        created.new_state.get_string(&AttributePath::new("id")).unwrap(),
        INSTANCE_ID
    );
    launch.assert_async().await;

    let read = resource
        .read(
            Context::new(),
            ReadResourceRequest {
                type_name: "leaseweb_public_cloud_instance".to_string(),
                current_state: created.new_state.clone(),
            },
        )
        .await;
    let state = read.new_state.expect("instance still exists");
    let model = InstanceResourceModel::from_dynamic(&state.value, &AttributePath::root()).unwrap();
    assert_eq!(model.state, Value::known("RUNNING".to_string()));
    assert_eq!(model.root_disk_size, Value::known(5));
    assert!(model.ssh_key.is_null());

    let deleted = resource
        .delete(
            Context::new(),
            DeleteResourceRequest {
                type_name: "leaseweb_public_cloud_instance".to_string(),
                prior_state: state,
            },
        )
        .await;
    assert!(deleted.diagnostics.is_empty(), "{}", deleted.diagnostics);
    terminate.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn dedicated_servers_data_source_lists_ids() {
    let mut server = Server::new_async().await;
    let _list = server
        .mock("GET", "/bareMetals/v2/servers")
        .match_header("X-LSW-Auth", TOKEN)
        .match_query(Matcher::UrlEncoded("reference".into(), "web".into()))
        .with_body(
            r#"{"servers": [{"id": "111"}, {"id": "222"}],
                "_metadata": {"totalCount": 2, "limit": 50, "offset": 0}}"#,
        )
        .create_async()
        .await;

    let mut provider = LeasewebProvider::new();
    let configured = provider
        .configure(Context::new(), configure_request(&server))
        .await;

    let factories = provider.data_sources();
    let mut data_source = factories["leaseweb_dedicated_servers"]();
    data_source
        .configure(
            Context::new(),
            ConfigureDataSourceRequest {
                provider_data: configured.provider_data,
            },
        )
        .await;

    let mut config = DynamicValue::object();
    config
        .set_string(&AttributePath::new("reference"), "web".to_string())
        .unwrap();

    let response = data_source
        .read(
            Context::new(),
            ReadDataSourceRequest {
                type_name: "leaseweb_dedicated_servers".to_string(),
                config,
            },
        )
        .await;

    assert!(response.diagnostics.is_empty(), "{}", response.diagnostics);
    assert_eq!(
        response.state.get(&AttributePath::new("ids")).unwrap(),
        &Dynamic::List(vec![
            Dynamic::String("111".to_string()),
            Dynamic::String("222".to_string()),
        ])
    );
}

#[tokio::test]
async fn resources_report_missing_configuration() {
    let provider = LeasewebProvider::new();

    let factories = provider.resources();
    let resource = factories["leaseweb_dedicated_server"]();
    let response = resource
        .read(
            Context::new(),
            ReadResourceRequest {
                type_name: "leaseweb_dedicated_server".to_string(),
                current_state: DynamicValue::object(),
            },
        )
        .await;

    assert_eq!(response.diagnostics.errors[0].summary, "Provider not configured");
}
