use crate::{errors::LarderError, Settings};
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use log::debug;
use parking_lot::Mutex;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client as ReqwestClient,
};
use serde_json::Value;
use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};
use tokio::time::Duration;

/// Supported authentication mechanisms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Token,
    Oauth,
}

/// A trait to perform authenticated API calls against a real or mock backend.
#[async_trait]
pub trait RestApi: Clone + Send + Sync {
    /// Perform a GET request and decode the response body as JSON.
    async fn get(&self, url: &str) -> Result<Value, LarderError>;

    /// Perform a POST request with a JSON body and decode the response body.
    async fn post(&self, url: &str, body: &Value) -> Result<Value, LarderError>;

    /// Perform a DELETE request.
    async fn delete(&self, url: &str) -> Result<(), LarderError>;
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// The request timeout in milliseconds.
    pub request_timeout: u64,
    /// The maximum number of idle connections allowed in the connection pool.
    pub max_idle_connections_per_host: usize,
    /// The timeout for idle connections to be kept alive in milliseconds.
    pub idle_connections_timeout: u64,
}

impl ApiConfig {
    pub fn new(settings: &Settings) -> Self {
        Self {
            request_timeout: settings.request_timeout,
            max_idle_connections_per_host: settings.max_idle_connections_per_host,
            idle_connections_timeout: settings.idle_connections_timeout,
        }
    }
}

/// A client to call the Larder API.
///
/// The authorization header is configured at construction; every request
/// carries it. Construction fails fast when no token is available.
#[derive(Clone, Debug)]
pub struct LarderApi {
    client: ReqwestClient,
}

impl LarderApi {
    pub fn new(token: &str, auth_mode: AuthMode, config: &ApiConfig) -> Result<Self, LarderError> {
        if token.is_empty() {
            return Err(LarderError::NotAuthenticated);
        }

        let scheme = match auth_mode {
            AuthMode::Token => "Token",
            AuthMode::Oauth => return Err(LarderError::UnsupportedAuthMode),
        };

        let mut auth_value = HeaderValue::from_str(&format!("{scheme} {token}"))
            .context("Can't build authorization header")?;
        auth_value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout))
            .pool_idle_timeout(Duration::from_millis(config.idle_connections_timeout))
            .pool_max_idle_per_host(config.max_idle_connections_per_host)
            .build()
            .map_err(LarderError::CreateClient)?;

        Ok(Self { client })
    }

    fn check_status(response: &reqwest::Response, url: &str) -> Result<(), LarderError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(LarderError::HttpStatus {
                status: response.status().to_string(),
                url: url.to_owned(),
            })
        }
    }
}

#[async_trait]
impl RestApi for LarderApi {
    async fn get(&self, url: &str) -> Result<Value, LarderError> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(LarderError::HttpResponse)?;
        Self::check_status(&response, url)?;
        response.json().await.map_err(LarderError::ParseHttpResponse)
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, LarderError> {
        debug!("POST {url}");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(LarderError::HttpResponse)?;
        Self::check_status(&response, url)?;
        response.json().await.map_err(LarderError::ParseHttpResponse)
    }

    async fn delete(&self, url: &str) -> Result<(), LarderError> {
        debug!("DELETE {url}");
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(LarderError::HttpResponse)?;
        Self::check_status(&response, url)
    }
}

/// A mock API used in testing, replaying canned JSON responses per url.
#[derive(Debug, Default, Clone)]
pub struct MockRestApi {
    /// The queued responses, replayed in FIFO order per url.
    responses: Arc<Mutex<HashMap<String, VecDeque<Value>>>>,
    /// The urls requested so far, in call order.
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockRestApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for a url.
    pub fn add(&self, url: &str, response: Value) {
        let mut responses = self.responses.lock();
        responses
            .entry(url.to_owned())
            .or_default()
            .push_back(response);
    }

    /// The urls requested so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        let requests = self.requests.lock();
        requests.clone()
    }

    fn next_response(&self, url: &str) -> Result<Value, LarderError> {
        self.requests.lock().push(url.to_owned());
        let mut responses = self.responses.lock();
        let response = responses
            .get_mut(url)
            .and_then(|queue| queue.pop_front())
            .ok_or(anyhow!("Missing mock response for {url}"))?;
        Ok(response)
    }
}

#[async_trait]
impl RestApi for MockRestApi {
    async fn get(&self, url: &str) -> Result<Value, LarderError> {
        self.next_response(url)
    }

    async fn post(&self, url: &str, _body: &Value) -> Result<Value, LarderError> {
        self.next_response(url)
    }

    async fn delete(&self, url: &str) -> Result<(), LarderError> {
        self.requests.lock().push(url.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_missing_token() {
        let config = ApiConfig::new(&Settings::default());
        let res = LarderApi::new("", AuthMode::Token, &config);
        assert_matches!(res, Err(LarderError::NotAuthenticated));
    }

    #[test]
    fn test_oauth_unsupported() {
        let config = ApiConfig::new(&Settings::default());
        let res = LarderApi::new("token", AuthMode::Oauth, &config);
        assert_matches!(res, Err(LarderError::UnsupportedAuthMode));
    }

    #[tokio::test]
    async fn test_mock_replays_responses_in_order() {
        let api = MockRestApi::new();
        api.add("https://url.com", json!({"page": 1}));
        api.add("https://url.com", json!({"page": 2}));

        let first = api.get("https://url.com").await.unwrap();
        let second = api.get("https://url.com").await.unwrap();
        assert_eq!(first, json!({"page": 1}));
        assert_eq!(second, json!({"page": 2}));

        let res = api.get("https://url.com").await;
        assert!(res.is_err());
        assert_eq!(api.requests().len(), 3);
    }
}
