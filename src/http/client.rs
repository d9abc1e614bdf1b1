use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::{status_error, with_decode_context, with_request_context};

/// JSON-over-HTTP client with a hard per-request timeout.
///
/// The timeout covers the whole exchange, from connect to the end of the body;
/// when it elapses the request is dropped and reported as an error.
#[derive(Clone)]
pub struct JsonClient {
    client: Client,
}

impl JsonClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str, shape: &str) -> Result<T> {
        let request = self.client.get(url);
        self.send_json(Method::GET, url, request, shape).await
    }

    pub async fn post_json<B, T>(&self, url: &str, body: &B, shape: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(url).json(body);
        self.send_json(Method::POST, url, request, shape).await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        request: reqwest::RequestBuilder,
        shape: &str,
    ) -> Result<T> {
        debug!("{} {}", method, url);
        let response = with_request_context(request.send().await, &method, url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(&method, url, status));
        }

        let bytes = with_request_context(response.bytes().await, &method, url)?;
        with_decode_context(serde_json::from_slice(&bytes), url, shape)
    }
}
