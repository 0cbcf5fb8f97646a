//! Catalog Data Loading
//!
//! Fetches the remote Porsche catalog over HTTP and decodes it into typed records.
//! Every call goes upstream; nothing is kept between requests.
//!
//! Upstream document shape:
//!   { "porsches": [ { "id": 1, "name": "...", ..., "manufacturer": { ... } } ] }

use serde::{Deserialize, Deserializer, Serialize};
use std::time::Instant;

/// Manufacturer embedded in a model record
///
/// Every field is optional: absent and `null` both decode to `None` and are
/// left out again on serialization, so a sort path over them stays missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Founding year, published either as text or as a bare number
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub founded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Manufacturer {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// One catalog entry (a single vehicle variant)
///
/// Serializes back to the upstream camelCase names, which is what sort
/// field paths are resolved against (`releaseDate`, `manufacturer.country`).
/// Fields upstream left out (or sent as `null`) are omitted again.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horsepower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_electric: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<Manufacturer>,
}

impl CatalogModel {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn feature_list(&self) -> &[String] {
        self.features.as_deref().unwrap_or_default()
    }

    pub fn electric(&self) -> bool {
        self.is_electric.unwrap_or(false)
    }

    /// Id of the embedded manufacturer, if both are present
    pub fn manufacturer_id(&self) -> Option<u64> {
        self.manufacturer.as_ref().and_then(|m| m.id)
    }
}

/// Top-level upstream document
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    porsches: Vec<CatalogModel>,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

/// Decode an upstream catalog body into its model records
pub fn parse_catalog(body: &[u8]) -> Result<Vec<CatalogModel>, serde_json::Error> {
    let document: CatalogDocument = serde_json::from_slice(body)?;
    Ok(document.porsches)
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream {url} answered {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not decode catalog from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP client for the remote catalog
///
/// Cheap to clone: `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Fetch and decode the full catalog
    ///
    /// No retry and no timeout: a failed fetch fails the request that asked for it.
    pub async fn fetch_models(&self) -> Result<Vec<CatalogModel>, FetchError> {
        let start = Instant::now();

        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let models = parse_catalog(&body).map_err(|source| FetchError::Decode {
            url: self.url.clone(),
            source,
        })?;

        tracing::debug!(
            "Fetched {} models from {} in {:?}",
            models.len(),
            self.url,
            start.elapsed()
        );

        Ok(models)
    }
}
