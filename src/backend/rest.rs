//! Data service client (PostgREST-style table REST).
//!
//! Thin, field-for-field passthrough to relational tables keyed by UUID
//! primary keys with `created_at`/`updated_at` timestamps. Row-level access
//! rules live on the backend; this client just forwards the caller's bearer
//! token so those rules can apply.

use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::backend::auth::{read_empty, read_json};
use crate::backend::error::BackendError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the hosted table REST surface.
pub struct RestClient {
    base_url: String,
    anon_key: String,
    client: Client,
}

impl RestClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            client,
        }
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn with_keys(&self, request: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
        let request = request.header("apikey", &self.anon_key);
        match bearer {
            Some(token) => request.bearer_auth(token),
            None => request.bearer_auth(&self.anon_key),
        }
    }

    /// Fetch rows. `filters` are raw PostgREST query pairs, e.g.
    /// `("user_id", "eq.<uuid>")` or `("order", "starts_at.asc")`.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, &str)],
        bearer: Option<&str>,
    ) -> Result<Vec<T>, BackendError> {
        debug!(table, ?filters, "rest select");
        let request = self
            .client
            .get(self.endpoint(table))
            .query(&[("select", "*")])
            .query(filters);
        read_json(self.with_keys(request, bearer).send().await?).await
    }

    /// Insert one row and return the stored representation (the backend
    /// fills in the id and timestamps).
    pub async fn insert<T: Serialize, R: DeserializeOwned>(
        &self,
        table: &str,
        row: &T,
        bearer: Option<&str>,
    ) -> Result<R, BackendError> {
        debug!(table, "rest insert");
        let request = self
            .client
            .post(self.endpoint(table))
            .header("Prefer", "return=representation")
            .json(row);
        let mut rows: Vec<R> = read_json(self.with_keys(request, bearer).send().await?).await?;
        rows.pop().ok_or(BackendError::Rejected {
            status: 502,
            message: "insert returned no representation".to_string(),
        })
    }

    /// Upsert whole rows, merging on the primary key. Used by the admin
    /// settings forms, which always write complete rows.
    pub async fn upsert<T: Serialize>(
        &self,
        table: &str,
        rows: &[T],
        bearer: Option<&str>,
    ) -> Result<(), BackendError> {
        debug!(table, count = rows.len(), "rest upsert");
        let request = self
            .client
            .post(self.endpoint(table))
            .header("Prefer", "resolution=merge-duplicates")
            .json(rows);
        read_empty(self.with_keys(request, bearer).send().await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_table_names() {
        let client = RestClient::new("https://project.example", "anon");
        assert_eq!(
            client.endpoint("bookings"),
            "https://project.example/rest/v1/bookings"
        );
    }
}
