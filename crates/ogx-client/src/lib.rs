//! # ogx-client
//!
//! HTTP client for the entity read API.
//!
//! Every response body is run through [`ogx_decode::decode`] before it is
//! returned or interpreted, and every request is recorded in an
//! [`ApiCallLog`] together with an equivalent `curl` command.
//!
//! Endpoints, relative to the configured base URL:
//! - `POST /search`: entity search
//! - `GET /{entityId}/metadata`: entity metadata
//! - `POST /{entityId}/relations`: relations of an entity
//! - `GET /{entityId}/attributes/{attrName}`: attribute values

pub mod calls;
pub mod extract;

mod error;
mod http;

pub use calls::{ApiCall, ApiCallLog, to_curl};
pub use error::ClientError;

use std::time::{Duration, Instant};

use ogx_core::requests::{require_attribute, require_entity_id};
use ogx_core::{AttributeQuery, EntityInfo, EntitySearchRequest, RelationResult, RelationsRequest};
use ogx_decode::{AttributeTable, decode, decode_attribute_table};
use reqwest::Method;
use serde_json::Value;

use crate::http::{check_response, read_json};

/// Read API root used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://aaf8ece1-3077-4a52-ab05-183a424f6d93-dev.e1-us-east-azure.choreoapis.dev/data-platform/read-api/v1.0/v1/entities";

/// Connection settings for [`ReadApiClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub call_log_capacity: usize,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: "ogx/0.1".to_string(),
            call_log_capacity: calls::DEFAULT_CAPACITY,
        }
    }
}

/// HTTP client for the entity read API.
#[derive(Debug, Clone)]
pub struct ReadApiClient {
    http: reqwest::Client,
    base_url: String,
    calls: ApiCallLog,
}

impl ReadApiClient {
    /// Build a client from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL is not an
    /// `http(s)` URL, or [`ClientError::Http`] if the underlying
    /// `reqwest::Client` cannot be built.
    pub fn new(options: &ClientOptions) -> Result<Self, ClientError> {
        let base_url = options.base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(options.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
            calls: ApiCallLog::with_capacity(options.call_log_capacity),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Log of every call made through this client (and its clones).
    #[must_use]
    pub const fn calls(&self) -> &ApiCallLog {
        &self.calls
    }

    /// Search entities by id, kind and/or name. Returns the decoded body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for a search without criteria, or
    /// any transport, status or parse error.
    pub async fn search(&self, request: &EntitySearchRequest) -> Result<Value, ClientError> {
        request.validate()?;
        let body = serde_json::to_value(request).map_err(|e| ClientError::Parse(e.to_string()))?;
        self.call(Method::POST, self.url("search"), Some(body)).await
    }

    /// Look up one entity by id. `Ok(None)` when the search succeeds but no
    /// matching record is found in the response.
    ///
    /// # Errors
    ///
    /// Returns any transport, status or parse error of the underlying search.
    pub async fn find_entity(&self, entity_id: &str) -> Result<Option<EntityInfo>, ClientError> {
        let data = self.search(&EntitySearchRequest::by_id(entity_id)).await?;
        let entity = extract::find_entity(&data, entity_id);
        if entity.is_none() {
            tracing::debug!(entity_id, "entity record not found in search response");
        }
        Ok(entity)
    }

    /// Fetch entity metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for an empty id, or any transport,
    /// status or parse error.
    pub async fn metadata(&self, entity_id: &str) -> Result<Value, ClientError> {
        require_entity_id(entity_id)?;
        let url = self.url(&format!("{}/metadata", urlencoding::encode(entity_id)));
        self.call(Method::GET, url, None).await
    }

    /// List relations of an entity matching `request`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for an empty id, or any transport,
    /// status or parse error.
    pub async fn relations(
        &self,
        entity_id: &str,
        request: &RelationsRequest,
    ) -> Result<Vec<RelationResult>, ClientError> {
        require_entity_id(entity_id)?;
        let body = serde_json::to_value(request).map_err(|e| ClientError::Parse(e.to_string()))?;
        let url = self.url(&format!("{}/relations", urlencoding::encode(entity_id)));
        let data = self.call(Method::POST, url, Some(body)).await?;
        Ok(extract::relations_from_response(data))
    }

    /// Fetch the decoded values of one attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for an empty id or attribute name,
    /// or any transport, status or parse error.
    pub async fn attribute(
        &self,
        entity_id: &str,
        attribute: &str,
        query: &AttributeQuery,
    ) -> Result<Value, ClientError> {
        require_attribute(entity_id, attribute)?;
        let url = self.attribute_url(entity_id, attribute, query);
        self.call(Method::GET, url, None).await
    }

    /// Fetch an attribute and shape it into columns and rows.
    ///
    /// # Errors
    ///
    /// Same as [`ReadApiClient::attribute`].
    pub async fn attribute_table(
        &self,
        entity_id: &str,
        attribute: &str,
        query: &AttributeQuery,
    ) -> Result<Option<AttributeTable>, ClientError> {
        let data = self.attribute(entity_id, attribute, query).await?;
        Ok(decode_attribute_table(&data))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn attribute_url(&self, entity_id: &str, attribute: &str, query: &AttributeQuery) -> String {
        let mut url = self.url(&format!(
            "{}/attributes/{}",
            urlencoding::encode(entity_id),
            urlencoding::encode(attribute)
        ));
        let qs = query
            .pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        if !qs.is_empty() {
            url.push('?');
            url.push_str(&qs);
        }
        url
    }

    /// Send one request, log it, check the status and decode the body.
    async fn call(
        &self,
        method: Method,
        url: String,
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let headers: &[(&str, &str)] = if body.is_some() {
            &[("Content-Type", "application/json")]
        } else {
            &[]
        };
        let curl = to_curl(method.as_str(), &url, headers, body.as_ref());
        let call_id = self.calls.record(method.as_str(), &url, curl);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let started = Instant::now();
        let sent = request.send().await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let resp = match sent {
            Ok(resp) => {
                let status = resp.status().as_u16();
                self.calls.complete(&call_id, status, duration_ms);
                tracing::debug!(method = %method, %url, status, duration_ms, "read api call");
                resp
            }
            Err(error) => {
                self.calls.fail(&call_id, error.to_string(), duration_ms);
                tracing::debug!(
                    method = %method,
                    %url,
                    %error,
                    duration_ms,
                    "read api call failed"
                );
                return Err(error.into());
            }
        };

        let data = read_json(check_response(resp).await?).await?;
        Ok(decode(&data))
    }
}
