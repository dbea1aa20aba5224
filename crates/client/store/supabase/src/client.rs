//! PostgREST-backed [`FighterStore`].

use async_trait::async_trait;
use client_store_core::{FighterStore, StoreError, TransportError};
use roster_core::{Fighter, FighterId, FighterPatch, NewFighter};
use serde::Serialize;

use crate::config::SupabaseConfig;
use crate::error::{ConfigError, transport_error};
use crate::row::{count_rows, decode_rows, decode_valid_rows};

const RETURN_REPRESENTATION: &str = "return=representation";

/// Fighter store backed by a Supabase table.
///
/// Every operation is one HTTP request. Writes ask PostgREST to echo the
/// affected rows so a missing id can be told apart from a successful no-op.
#[derive(Clone)]
pub struct SupabaseFighterStore {
    /// HTTP client, with the configured timeout
    http: reqwest::Client,

    /// `{url}/rest/v1/{table}`
    endpoint: String,

    /// Anon key sent on every request
    api_key: String,
}

impl SupabaseFighterStore {
    /// Create a store from validated configuration.
    pub fn new(config: SupabaseConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        let endpoint = config.rest_endpoint();
        tracing::info!(%endpoint, "Supabase store ready");

        Ok(Self {
            http,
            endpoint,
            api_key: config.anon_key,
        })
    }

    /// Create a store from `SUPABASE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(SupabaseConfig::from_env()?)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.http
            .request(method, &self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Sends `request` and returns the body of a successful response.
    async fn send(
        &self,
        op: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<String, TransportError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(op, error = %e, "Supabase request failed");
            TransportError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(op, %status, %body, "Supabase returned an error");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(transport_error)?;
        tracing::debug!(op, bytes = body.len(), "Supabase response received");
        Ok(body)
    }

    /// Sends `request` and reports whether it matched any row.
    ///
    /// The returned rows are only counted. A write has already happened by
    /// then, so a malformed row must not turn it into a failure.
    async fn matches_any(
        &self,
        op: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<bool, TransportError> {
        let body = self.send(op, request).await?;
        Ok(count_rows(&body)? > 0)
    }

    fn by_id(&self, method: reqwest::Method, id: &FighterId) -> reqwest::RequestBuilder {
        self.request(method)
            .query(&[("id", format!("eq.{id}"))])
    }

    fn with_body<T: Serialize + ?Sized>(
        request: reqwest::RequestBuilder,
        body: &T,
    ) -> reqwest::RequestBuilder {
        request.header("Prefer", RETURN_REPRESENTATION).json(body)
    }
}

#[async_trait]
impl FighterStore for SupabaseFighterStore {
    async fn list(&self) -> Result<Vec<Fighter>, StoreError> {
        let request = self
            .request(reqwest::Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")]);
        let body = self.send("list", request).await?;
        let fighters = decode_valid_rows(&body)?;
        tracing::debug!(count = fighters.len(), "Listed fighters");
        Ok(fighters)
    }

    async fn get(&self, id: &FighterId) -> Result<Fighter, StoreError> {
        let request = self
            .by_id(reqwest::Method::GET, id)
            .query(&[("select", "*")]);
        let body = self.send("get", request).await?;
        decode_rows(&body)?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn create(&self, fighter: NewFighter) -> Result<Fighter, StoreError> {
        let fighter = fighter.normalized()?;
        let request = Self::with_body(self.request(reqwest::Method::POST), &[&fighter]);

        let body = self.send("create", request).await?;
        let created = decode_rows(&body)?
            .into_iter()
            .next()
            .ok_or_else(|| TransportError::Decode("insert returned no rows".to_string()))?;

        tracing::info!(id = %created.id, name = %created.name, "Created fighter");
        Ok(created)
    }

    async fn update(&self, id: &FighterId, patch: FighterPatch) -> Result<(), StoreError> {
        let patch = patch.normalized()?;
        if patch.is_empty() {
            // PostgREST rejects an empty PATCH body; only existence is checked.
            let request = self
                .by_id(reqwest::Method::GET, id)
                .query(&[("select", "id")]);
            if !self.matches_any("exists", request).await? {
                return Err(StoreError::NotFound(id.clone()));
            }
            return Ok(());
        }

        let request = Self::with_body(self.by_id(reqwest::Method::PATCH, id), &patch);
        if !self.matches_any("update", request).await? {
            return Err(StoreError::NotFound(id.clone()));
        }

        tracing::info!(%id, "Updated fighter");
        Ok(())
    }

    async fn delete(&self, id: &FighterId) -> Result<(), StoreError> {
        let request = self
            .by_id(reqwest::Method::DELETE, id)
            .header("Prefer", RETURN_REPRESENTATION);
        if !self.matches_any("delete", request).await? {
            return Err(StoreError::NotFound(id.clone()));
        }

        tracing::info!(%id, "Deleted fighter");
        Ok(())
    }

    fn backend(&self) -> &str {
        "supabase"
    }
}
