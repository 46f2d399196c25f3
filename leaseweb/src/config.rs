//! Provider configuration
//!
//! Every attribute of the provider block falls back to an environment
//! variable when it is not set in the configuration.

use crate::api::Client;
use crate::error::{Error, Result};
use tfplug::types::{AttributePath, Diagnostic, Diagnostics, DynamicValue};
use tfplug::value::FromDynamic;
use tfplug::Value;

pub const TOKEN_ENV: &str = "LEASEWEB_TOKEN";
pub const HOST_ENV: &str = "LEASEWEB_HOST";
pub const SCHEME_ENV: &str = "LEASEWEB_SCHEME";

pub const DEFAULT_HOST: &str = "api.leaseweb.com";
pub const DEFAULT_SCHEME: &str = "https";

object_model! {
    /// Provider block as written in the configuration
    pub struct ProviderConfigModel {
        token: Value<String> => "token": AttributeType::String,
        host: Value<String> => "host": AttributeType::String,
        scheme: Value<String> => "scheme": AttributeType::String,
    }
}

/// Resolved, immutable provider configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub token: String,
    pub host: String,
    pub scheme: String,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("token", &"<redacted>")
            .field("host", &self.host)
            .field("scheme", &self.scheme)
            .finish()
    }
}

impl ProviderConfig {
    /// Resolves the provider block against the environment
    ///
    /// A missing token is reported on the `token` attribute.
    pub fn from_config(config: &DynamicValue) -> std::result::Result<Self, Diagnostics> {
        let model = if config.is_null() {
            ProviderConfigModel::default()
        } else {
            ProviderConfigModel::from_dynamic(&config.value, &AttributePath::root())?
        };

        let token = configured_or_env(&model.token, TOKEN_ENV).ok_or_else(|| {
            Diagnostics::from(
                Diagnostic::error(
                    "Missing API Token",
                    format!(
                        "token is required, set it in the provider block or in the {} environment variable",
                        TOKEN_ENV
                    ),
                )
                .with_attribute(AttributePath::new("token")),
            )
        })?;

        let host =
            configured_or_env(&model.host, HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let scheme = configured_or_env(&model.scheme, SCHEME_ENV)
            .unwrap_or_else(|| DEFAULT_SCHEME.to_string());

        Ok(Self {
            token,
            host,
            scheme,
        })
    }

    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    /// Builds the shared API client
    pub fn client(&self) -> Result<Client> {
        Client::from_host(&self.scheme, &self.host, &self.token)
            .map_err(|e| Error::Configuration(e.to_string()))
    }
}

fn configured_or_env(value: &Value<String>, env: &str) -> Option<String> {
    value
        .as_known()
        .filter(|v| !v.is_empty())
        .cloned()
        .or_else(|| std::env::var(env).ok().filter(|v| !v.is_empty()))
}
