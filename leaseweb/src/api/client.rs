use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tfplug::context::Context;
use url::Url;

use super::dedicated_server::DedicatedServerApi;
use super::error::ApiError;
use super::public_cloud::PublicCloudApi;

/// Header carrying the API token
pub const AUTH_HEADER: &str = "X-LSW-Auth";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Leaseweb API client, cheap to clone
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    token: String,
}

impl Client {
    /// `base_url` is `scheme://host`, e.g. `https://api.leaseweb.com`
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                token: token.to_string(),
            }),
        })
    }

    pub fn from_host(scheme: &str, host: &str, token: &str) -> Result<Self, ApiError> {
        Self::new(&format!("{}://{}", scheme, host), token)
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Public cloud operations
    pub fn public_cloud(&self) -> PublicCloudApi<'_> {
        PublicCloudApi::new(self)
    }

    /// Dedicated server operations
    pub fn dedicated_servers(&self) -> DedicatedServerApi<'_> {
        DedicatedServerApi::new(self)
    }

    pub async fn get<T: DeserializeOwned>(&self, ctx: &Context, path: &str) -> Result<T, ApiError> {
        self.get_with_query(ctx, path, &[]).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut url = self.url(path)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        let request = self.inner.http_client.get(url.clone());
        let body = self.execute(ctx, Method::GET, &url, request).await?;
        parse(&body)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        let request = self.inner.http_client.post(url.clone()).json(body);
        let body = self.execute(ctx, Method::POST, &url, request).await?;
        parse(&body)
    }

    /// POST whose response body is ignored
    pub async fn post_action<B: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.url(path)?;
        let request = self.inner.http_client.post(url.clone()).json(body);
        self.execute(ctx, Method::POST, &url, request).await?;
        Ok(())
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        let request = self.inner.http_client.put(url.clone()).json(body);
        let body = self.execute(ctx, Method::PUT, &url, request).await?;
        parse(&body)
    }

    /// PUT whose response body is ignored
    pub async fn put_action<B: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.url(path)?;
        let request = self.inner.http_client.put(url.clone()).json(body);
        self.execute(ctx, Method::PUT, &url, request).await?;
        Ok(())
    }

    pub async fn delete(&self, ctx: &Context, path: &str) -> Result<(), ApiError> {
        let url = self.url(path)?;
        let request = self.inner.http_client.delete(url.clone());
        self.execute(ctx, Method::DELETE, &url, request).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    /// Sends the request and returns the raw body of a 2xx response
    async fn execute(
        &self,
        ctx: &Context,
        method: Method,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<String, ApiError> {
        tracing::debug!("{} request to: {}", method, url);

        let request = request.header(AUTH_HEADER, &self.inner.token);

        let response = tokio::select! {
            biased;
            _ = ctx.cancelled() => {
                tracing::debug!("{} {} cancelled", method, url);
                return Err(ApiError::Cancelled);
            }
            response = request.send() => response?,
        };

        let status = response.status();
        let body = tokio::select! {
            biased;
            _ = ctx.cancelled() => return Err(ApiError::Cancelled),
            body = response.text() => body?,
        };

        if !status.is_success() {
            tracing::error!("{} {} returned {}: {}", method, url, status, body);
            return Err(ApiError::from_response(status, &body));
        }

        tracing::debug!("API response body: {}", body);
        Ok(body)
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    // Action endpoints answer 204 without a body
    let body = if body.trim().is_empty() { "null" } else { body };

    serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to deserialize response: {}, body: {}", e, body);
        ApiError::Parse(e.to_string())
    })
}
