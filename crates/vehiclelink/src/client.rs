//! HTTP client for the vehicle-reference API.
//!
//! One `fetch_*` method per resource. Each method renders its path and
//! query string from the endpoint table and delegates to the shared request
//! pipeline; the client itself adds no validation, no caching, and no error
//! handling beyond the executor's taxonomy. Argument shape constraints
//! (e.g. non-empty codes) are the caller's responsibility.

use crate::endpoint;
use crate::model::{Attachment, Family, Make, Segment, Variant, Vehicle};
use crate::request::{self, ClientError};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Vehiclelink client configuration.
#[derive(Debug, Clone)]
pub struct VehiclelinkConfig {
    /// Base URL of the Vehiclelink server (e.g. <http://localhost:8000>)
    pub host: String,
    /// Bearer token sent on every request
    pub bearer_token: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for VehiclelinkConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:8000".to_string(),
            bearer_token: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Per-call options for endpoints without query filters.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Cancels the in-flight request when triggered
    pub cancel: Option<CancellationToken>,
}

/// Per-call options for [`VehiclelinkClient::fetch_vehicles`].
///
/// Each field, when present and non-empty, is appended as the query
/// parameter of the same name, after the required identifiers; absent
/// fields are omitted entirely.
#[derive(Debug, Clone, Default)]
pub struct VehicleQuery {
    /// Unit for dimensional values, e.g. `mm`
    pub size_unit: Option<String>,
    /// Unit for weight values, e.g. `kg`
    pub weight_unit: Option<String>,
    /// Field to order results by
    pub order_by: Option<String>,
    /// Order direction, e.g. `asc` or `desc`
    pub order_direction: Option<String>,
    /// Cancels the in-flight request when triggered
    pub cancel: Option<CancellationToken>,
}

/// Per-call options for [`VehiclelinkClient::fetch_variants`].
#[derive(Debug, Clone, Default)]
pub struct VariantQuery {
    /// Unit for dimensional values, e.g. `mm`
    pub size_unit: Option<String>,
    /// Unit for weight values, e.g. `kg`
    pub weight_unit: Option<String>,
    /// Minimum seat capacity filter
    pub seat_capacity: Option<String>,
    /// Cancels the in-flight request when triggered
    pub cancel: Option<CancellationToken>,
}

/// Per-call options for [`VehiclelinkClient::fetch_attachments`].
#[derive(Debug, Clone, Default)]
pub struct AttachmentQuery {
    /// Unit for dimensional values, e.g. `m`
    pub size_unit: Option<String>,
    /// Unit for weight values, e.g. `t`
    pub weight_unit: Option<String>,
    /// Cancels the in-flight request when triggered
    pub cancel: Option<CancellationToken>,
}

/// Async client for the vehicle-reference API.
///
/// Holds an immutable host and bearer token; every method issues a single
/// independent GET request with no state carried across calls.
pub struct VehiclelinkClient {
    client: reqwest::Client,
    config: VehiclelinkConfig,
}

impl VehiclelinkClient {
    /// Create a new Vehiclelink client.
    ///
    /// A trailing slash on the configured host is tolerated.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(mut config: VehiclelinkConfig) -> Result<Self, ClientError> {
        config.host = config.host.trim_end_matches('/').to_string();

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Init(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the authorization header value.
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.config.bearer_token)
    }

    /// Issue a GET for a rendered path-and-query and decode the response.
    async fn get<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.config.host, path_and_query);

        tracing::debug!(url, "GET");

        let request = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header());

        request::execute(request, cancel).await
    }

    /// Fetch all market segments.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn fetch_segments(&self, opts: &FetchOptions) -> Result<Vec<Segment>, ClientError> {
        let path = endpoint::SEGMENTS.render(&[], &[]);
        self.get(&path, opts.cancel.as_ref()).await
    }

    /// Fetch the makes within a segment.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn fetch_makes(
        &self,
        segment: &str,
        opts: &FetchOptions,
    ) -> Result<Vec<Make>, ClientError> {
        let path = endpoint::MAKES.render(&[segment], &[]);
        self.get(&path, opts.cancel.as_ref()).await
    }

    /// Fetch the families of a make within a segment.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn fetch_families(
        &self,
        segment: &str,
        make_code: &str,
        opts: &FetchOptions,
    ) -> Result<Vec<Family>, ClientError> {
        let path = endpoint::FAMILIES.render(&[segment], &[Some(make_code)]);
        self.get(&path, opts.cancel.as_ref()).await
    }

    /// Fetch the vehicles matching a make, family, and body style.
    ///
    /// Optional units and ordering hints are supplied via `query`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn fetch_vehicles(
        &self,
        segment: &str,
        make_code: &str,
        family_code: &str,
        body_style_code: &str,
        query: &VehicleQuery,
    ) -> Result<Vec<Vehicle>, ClientError> {
        let path = endpoint::VEHICLES.render(
            &[segment],
            &[
                Some(make_code),
                Some(family_code),
                Some(body_style_code),
                query.size_unit.as_deref(),
                query.weight_unit.as_deref(),
                query.order_by.as_deref(),
                query.order_direction.as_deref(),
            ],
        );
        self.get(&path, query.cancel.as_ref()).await
    }

    /// Fetch a single variant by its code.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn fetch_variant(
        &self,
        segment: &str,
        variant_code: &str,
        opts: &FetchOptions,
    ) -> Result<Variant, ClientError> {
        let path = endpoint::VARIANT.render(&[segment, variant_code], &[]);
        self.get(&path, opts.cancel.as_ref()).await
    }

    /// Fetch the variants matching a make, family, body style, and year.
    ///
    /// Optional units and a seat-capacity filter are supplied via `query`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn fetch_variants(
        &self,
        segment: &str,
        make_code: &str,
        family_code: &str,
        body_style_code: &str,
        year_code: &str,
        query: &VariantQuery,
    ) -> Result<Vec<Variant>, ClientError> {
        let path = endpoint::VARIANTS.render(
            &[segment],
            &[
                Some(make_code),
                Some(family_code),
                Some(body_style_code),
                Some(year_code),
                query.size_unit.as_deref(),
                query.weight_unit.as_deref(),
                query.seat_capacity.as_deref(),
            ],
        );
        self.get(&path, query.cancel.as_ref()).await
    }

    /// Fetch all accessory attachments.
    ///
    /// Optional units are supplied via `query`.
    ///
    /// # Errors
    ///
    /// Returns error on network or API errors.
    pub async fn fetch_attachments(
        &self,
        query: &AttachmentQuery,
    ) -> Result<Vec<Attachment>, ClientError> {
        let path = endpoint::ATTACHMENTS.render(
            &[],
            &[query.size_unit.as_deref(), query.weight_unit.as_deref()],
        );
        self.get(&path, query.cancel.as_ref()).await
    }
}
