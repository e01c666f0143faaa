//! HTTP implementation of [`ProductStore`]
//!
//! Works against any server speaking the Product API:
//! - GET    /product        -> { "Products": [...] }
//! - GET    /product/{id}   -> Product
//! - POST   /product        <- { name, description, price }
//! - PUT    /product/{id}   <- { name, description, price }
//! - DELETE /product/{id}
//!
//! Failure bodies are expected as `{ "message": "..." }`; that message is
//! surfaced verbatim, with a per-operation fallback when it is missing.

use super::{ProductStore, StoreError};
use crate::product::{Product, ProductDraft};
use anyhow::{bail, Context, Result};
use reqwest::{RequestBuilder, Response, Url};
use serde::Deserialize;
use serde_json::Value;

const LIST_FAILED: &str = "Failed to fetch products";
const GET_FAILED: &str = "Failed to fetch product details.";
const CREATE_FAILED: &str = "Failed to add product.";
const UPDATE_FAILED: &str = "Failed to update product.";
const REMOVE_FAILED: &str = "Failed to delete product";
const NOT_A_SEQUENCE: &str = "Received data is not an array";

/// Failure body shape
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Product API client
///
/// Cheap to clone: `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct RemoteProductStore {
    client: reqwest::Client,
    base_url: Url,
}

impl RemoteProductStore {
    /// Create a client for the API rooted at `base_url`
    ///
    /// No request timeout is configured: a call that never resolves keeps its
    /// screen pending.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            bail!("API base URL cannot have paths appended: {}", base_url);
        }

        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        tracing::debug!("Product API client ready: {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/product` or `{base}/product/{id}`, with the id percent-encoded
    fn endpoint(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("product");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    /// Send one request; non-success statuses become `StoreError::Fetch`
    async fn send(&self, request: RequestBuilder, fallback: &str) -> Result<Response, StoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());

        tracing::warn!("Product API returned {}: {}", status, message);
        Err(StoreError::status(status.as_u16(), message))
    }
}

/// Pull the `Products` sequence out of a list response body
///
/// All or nothing: one malformed entry fails the whole list.
pub(crate) fn decode_product_list(body: Value) -> Result<Vec<Product>, StoreError> {
    let items = match body {
        Value::Object(mut map) => match map.remove("Products") {
            Some(Value::Array(items)) => items,
            _ => return Err(StoreError::Shape(NOT_A_SEQUENCE.to_string())),
        },
        _ => return Err(StoreError::Shape(NOT_A_SEQUENCE.to_string())),
    };

    items
        .into_iter()
        .map(serde_json::from_value::<Product>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StoreError::Shape(format!("Received malformed product: {}", e)))
}

/// Map a body-read error: decode failures are shape problems, the rest are transport
fn body_error(e: reqwest::Error, what: &str) -> StoreError {
    if e.is_decode() {
        StoreError::Shape(format!("Response is not {}", what))
    } else {
        StoreError::transport(e.to_string())
    }
}

impl ProductStore for RemoteProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let url = self.endpoint(None);
        tracing::debug!("GET {}", url);

        let response = self.send(self.client.get(url), LIST_FAILED).await?;
        let body: Value = response
            .json()
            .await
            .map_err(|e| body_error(e, "valid JSON"))?;

        let products = decode_product_list(body)?;
        tracing::info!("Loaded {} product(s)", products.len());
        Ok(products)
    }

    async fn get(&self, id: &str) -> Result<Product, StoreError> {
        let url = self.endpoint(Some(id));
        tracing::debug!("GET {}", url);

        let response = self.send(self.client.get(url), GET_FAILED).await?;
        response
            .json::<Product>()
            .await
            .map_err(|e| body_error(e, "a product"))
    }

    async fn create(&self, draft: &ProductDraft) -> Result<Option<Product>, StoreError> {
        draft.check_required()?;

        let url = self.endpoint(None);
        tracing::debug!("POST {}", url);

        let response = self
            .send(self.client.post(url).json(draft), CREATE_FAILED)
            .await?;

        // Success body is informational only
        let created = response
            .json::<Product>()
            .await
            .ok()
            .filter(|p| !p.id.is_empty());

        tracing::info!(
            "Created product {:?} (id: {})",
            draft.name,
            created.as_ref().map(|p| p.id.as_str()).unwrap_or("unknown")
        );
        Ok(created)
    }

    async fn update(&self, id: &str, draft: &ProductDraft) -> Result<(), StoreError> {
        let url = self.endpoint(Some(id));
        tracing::debug!("PUT {}", url);

        self.send(self.client.put(url).json(draft), UPDATE_FAILED)
            .await?;
        tracing::info!("Updated product {}", id);
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let url = self.endpoint(Some(id));
        tracing::debug!("DELETE {}", url);

        self.send(self.client.delete(url), REMOVE_FAILED).await?;
        tracing::info!("Deleted product {}", id);
        Ok(())
    }
}
