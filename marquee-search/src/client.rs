//! Remote catalog client.
//!
//! Talks to an OMDb-shaped catalog service over HTTP GET: paged text
//! search and single-title detail lookup. No retries and no timeout
//! here; callers that need them add them at the boundary.

use async_trait::async_trait;
use marquee_core::config::CatalogConfig;
use serde::Deserialize;

use crate::errors::CatalogError;
use crate::types::{MediaKind, SearchPage, SearchQuery, TitleDetail, TitleSummary};

/// Value the catalog uses for "field not available".
const NOT_AVAILABLE: &str = "N/A";

/// Fallback when the catalog signals failure without a message.
const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Interface to the remote catalog, one method per query shape.
///
/// The state machines depend on this trait rather than on a concrete
/// HTTP client so they can be driven by a scripted catalog in tests.
#[async_trait]
pub trait CatalogClient: Send + Sync + std::fmt::Debug {
    /// Runs a paged text search.
    ///
    /// # Errors
    ///
    /// - `CatalogError::InvalidQuery` - empty search text
    /// - `CatalogError::Transport` - network failure or non-success status
    /// - `CatalogError::Service` - the catalog reported a logical failure
    /// - `CatalogError::Parse` - undecodable response body
    async fn search(&self, query: &SearchQuery, page: u32) -> Result<SearchPage, CatalogError>;

    /// Fetches the full record for one title, full-length plot included.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`CatalogClient::search`].
    async fn detail(&self, imdb_id: &str) -> Result<TitleDetail, CatalogError>;
}

/// Production catalog client backed by reqwest.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OmdbClient {
    /// Builds a client from catalog configuration.
    ///
    /// # Errors
    ///
    /// - `CatalogError::Transport` - malformed endpoint URL or HTTP
    ///   client construction failure
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        url::Url::parse(&config.endpoint).map_err(|e| CatalogError::Transport {
            reason: format!("invalid catalog endpoint '{}': {e}", config.endpoint),
        })?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| CatalogError::Transport {
                reason: format!("HTTP client construction failed: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Assembles search query parameters. Unset filters are omitted
    /// entirely, never sent as empty strings.
    fn search_params(&self, query: &SearchQuery, page: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("apikey", self.api_key.clone()),
            ("s", query.text.clone()),
        ];
        if let Some(kind) = query.kind {
            params.push(("type", kind.as_param().to_string()));
        }
        if let Some(ref year) = query.year {
            params.push(("y", year.clone()));
        }
        params.push(("page", page.to_string()));
        params
    }

    async fn get_json<T>(&self, params: &[(&'static str, String)]) -> Result<T, CatalogError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(&self.endpoint)
            .query(params)
            .send()
            .await
            .map_err(|e| CatalogError::Transport {
                reason: format!("request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(CatalogError::Transport {
                reason: format!("HTTP {}", response.status()),
            });
        }

        response.json().await.map_err(|e| CatalogError::Parse {
            reason: format!("JSON decoding failed: {e}"),
        })
    }
}

#[async_trait]
impl CatalogClient for OmdbClient {
    async fn search(&self, query: &SearchQuery, page: u32) -> Result<SearchPage, CatalogError> {
        let query = query.normalized();
        if !query.is_submittable() {
            return Err(CatalogError::InvalidQuery {
                reason: "search text is empty".to_string(),
            });
        }

        tracing::debug!(text = %query.text, page, "catalog search");
        let envelope: SearchEnvelope = self.get_json(&self.search_params(&query, page)).await?;
        envelope.into_page(page)
    }

    async fn detail(&self, imdb_id: &str) -> Result<TitleDetail, CatalogError> {
        let imdb_id = imdb_id.trim();
        if imdb_id.is_empty() {
            return Err(CatalogError::InvalidQuery {
                reason: "title identifier is empty".to_string(),
            });
        }

        tracing::debug!(imdb_id, "catalog detail lookup");
        let params = [
            ("apikey", self.api_key.clone()),
            ("i", imdb_id.to_string()),
            ("plot", "full".to_string()),
        ];
        let envelope: DetailEnvelope = self.get_json(&params).await?;
        envelope.into_detail(imdb_id)
    }
}

/// Drops the catalog's "not available" sentinel and blank strings.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| v != NOT_AVAILABLE && !v.trim().is_empty())
}

/// Search response envelope from the catalog.
#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Search", default)]
    results: Vec<WireSummary>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Single search result row on the wire.
#[derive(Debug, Deserialize)]
struct WireSummary {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

impl SearchEnvelope {
    /// Converts the envelope into a domain page, surfacing the
    /// catalog's own failure signal as `Service`.
    fn into_page(self, page: u32) -> Result<SearchPage, CatalogError> {
        if self.response != "True" {
            return Err(CatalogError::Service {
                message: self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            });
        }

        // totalResults is string-encoded; unparseable counts as zero.
        let total_count = self
            .total_results
            .and_then(|total| total.parse().ok())
            .unwrap_or(0);

        let items = self
            .results
            .into_iter()
            .map(|row| TitleSummary {
                imdb_id: row.imdb_id,
                title: row.title,
                year: row.year,
                kind: MediaKind::from_wire(&row.kind),
                poster_url: present(row.poster),
            })
            .collect();

        Ok(SearchPage {
            items,
            total_count,
            page,
        })
    }
}

/// Detail response envelope from the catalog.
#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Type")]
    kind: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "Released")]
    released: Option<String>,
    #[serde(rename = "imdbRating")]
    rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    votes: Option<String>,
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl DetailEnvelope {
    fn into_detail(self, requested_id: &str) -> Result<TitleDetail, CatalogError> {
        if self.response != "True" {
            return Err(CatalogError::Service {
                message: self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            });
        }

        Ok(TitleDetail {
            imdb_id: self.imdb_id.unwrap_or_else(|| requested_id.to_string()),
            title: self.title.unwrap_or_else(|| "Unknown".to_string()),
            year: self.year.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            kind: MediaKind::from_wire(self.kind.as_deref().unwrap_or_default()),
            poster_url: present(self.poster),
            plot: present(self.plot),
            genre: present(self.genre),
            director: present(self.director),
            actors: present(self.actors),
            runtime: present(self.runtime),
            released: present(self.released),
            rating: present(self.rating),
            votes: present(self.votes),
        })
    }
}
