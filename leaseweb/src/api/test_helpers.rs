//! Test helpers for the Leaseweb API

pub const TEST_TOKEN: &str = "test-token";

pub fn create_test_client(url: &str) -> super::Client {
    super::Client::new(url, TEST_TOKEN).unwrap()
}

pub const INSTANCE_ID: &str = "ace712e9-a166-47f1-9065-4af0f7e7fce1";

/// Body of `GET /publicCloud/v1/instances/{id}`
pub fn instance_details_json() -> String {
    format!(
        r#"{{
        "id": "{id}",
        "type": "lsw.m5a.4xlarge",
        "resources": {{
            "cpu": {{"value": 16, "unit": "vCPU"}},
            "memory": {{"value": 64, "unit": "GiB"}},
            "publicNetworkSpeed": {{"value": 10000, "unit": "Gbps"}},
            "privateNetworkSpeed": {{"value": 10000, "unit": "Gbps"}}
        }},
        "region": "eu-west-3",
        "reference": "my webserver",
        "image": {{
            "id": "UBUNTU_20_04_64BIT",
            "name": "Ubuntu 20.04 LTS (x86_64)",
            "version": "20.04",
            "family": "linux",
            "flavour": "ubuntu",
            "architecture": "x86_64",
            "custom": false,
            "marketApps": [],
            "storageTypes": ["LOCAL", "CENTRAL"]
        }},
        "state": "RUNNING",
        "productType": "INSTANCE",
        "hasPublicIpV4": true,
        "hasPrivateNetwork": false,
        "rootDiskSize": 50,
        "rootDiskStorageType": "CENTRAL",
        "ips": [
            {{
                "ip": "10.32.60.12",
                "prefixLength": "28",
                "version": 4,
                "nullRouted": false,
                "mainIp": true,
                "networkType": "PUBLIC",
                "reverseLookup": "example.com",
                "ddos": {{"detectionProfile": "ADVANCED_DEFAULT", "protectionType": "ADVANCED"}}
            }}
        ],
        "startedAt": "2019-09-08T00:00:00Z",
        "contract": {{
            "billingFrequency": 1,
            "term": 3,
            "type": "MONTHLY",
            "endsAt": null,
            "renewalsAt": "2020-02-01T00:00:00Z",
            "createdAt": "2019-09-08T00:00:00Z",
            "state": "ACTIVE"
        }},
        "marketAppId": null,
        "autoScalingGroup": null,
        "iso": null,
        "privateNetwork": null,
        "volume": {{"size": 50, "unit": "GB"}}
    }}"#,
        id = INSTANCE_ID
    )
}

/// Body of a compact instance as returned by listings and launches
pub fn instance_json(id: &str, reference: &str) -> String {
    format!(
        r#"{{
        "id": "{id}",
        "type": "lsw.m5a.4xlarge",
        "resources": {{
            "cpu": {{"value": 16, "unit": "vCPU"}},
            "memory": {{"value": 64, "unit": "GiB"}},
            "publicNetworkSpeed": {{"value": 10000, "unit": "Gbps"}},
            "privateNetworkSpeed": {{"value": 10000, "unit": "Gbps"}}
        }},
        "region": "eu-west-3",
        "reference": "{reference}",
        "image": {{
            "id": "UBUNTU_20_04_64BIT",
            "name": "Ubuntu 20.04 LTS (x86_64)",
            "family": "linux",
            "flavour": "ubuntu",
            "custom": false
        }},
        "state": "CREATING",
        "rootDiskSize": 50,
        "rootDiskStorageType": "CENTRAL",
        "ips": [],
        "contract": {{
            "billingFrequency": 1,
            "term": 3,
            "type": "MONTHLY",
            "state": "ACTIVE"
        }}
    }}"#,
        id = id,
        reference = reference
    )
}

pub const SERVER_ID: &str = "12345";

/// Body of `GET /bareMetals/v2/servers/{id}`
pub fn server_json(reference: &str) -> String {
    format!(
        r#"{{
        "id": "{id}",
        "assetId": "627294",
        "serialNumber": "JDK18291JK",
        "contract": {{
            "id": "674382",
            "customerId": "1301178860",
            "deliveryStatus": "ACTIVE",
            "reference": "{reference}",
            "salesOrgId": "2000"
        }},
        "location": {{"rack": "13", "site": "AMS-01", "suite": "A6", "unit": "16-17"}},
        "networkInterfaces": {{
            "internal": {{"gateway": "10.22.192.12", "ip": "10.22.192.3/27", "mac": "AA:BB:CC:DD:EE:FF"}},
            "public": {{"gateway": "95.211.162.62", "ip": "95.211.162.0/26", "mac": "AA:AC:CC:88:EE:E4"}},
            "remoteManagement": {{"gateway": "10.22.192.126", "ip": "10.22.192.1/27", "mac": "AA:AC:CC:88:EE:E3"}}
        }}
    }}"#,
        id = SERVER_ID,
        reference = reference
    )
}

/// Body of an instance type listing with one entry per name
pub fn instance_types_json(names: &[&str]) -> String {
    let instance_types: Vec<String> = names
        .iter()
        .map(|name| {
            format!(
                r#"{{
            "name": "{name}",
            "resources": {{
                "cpu": {{"value": 2, "unit": "vCPU"}},
                "memory": {{"value": 8, "unit": "GiB"}},
                "publicNetworkSpeed": {{"value": 1000, "unit": "Mbps"}},
                "privateNetworkSpeed": {{"value": 1000, "unit": "Mbps"}}
            }},
            "prices": {{
                "currency": "EUR",
                "currencySymbol": "€",
                "compute": {{"hourlyPrice": "0.1", "monthlyPrice": "50"}},
                "storage": {{
                    "local": {{"hourlyPrice": "0", "monthlyPrice": "0"}},
                    "central": {{"hourlyPrice": "0", "monthlyPrice": "0"}}
                }}
            }},
            "storageTypes": ["CENTRAL"]
        }}"#,
                name = name
            )
        })
        .collect();

    format!(
        r#"{{"instanceTypes": [{}], "_metadata": {{"totalCount": {}, "limit": 50, "offset": 0}}}}"#,
        instance_types.join(","),
        names.len()
    )
}

/// Body of `GET /publicCloud/v1/regions`
pub fn regions_json() -> String {
    r#"{
        "regions": [
            {"name": "eu-west-3", "location": "Amsterdam"},
            {"name": "us-east-1", "location": "Manassas"}
        ],
        "_metadata": {"totalCount": 2, "limit": 50, "offset": 0}
    }"#
    .to_string()
}
