//! HTTP clients for the row API and the postal-code lookup
//!
//! Both are single-attempt: no retries, no backoff and no timeouts beyond
//! what `reqwest` applies by default.

use super::error::{ApiError, LookupError};
use super::traits::{AddressLookup, RowSubmitter};
use crate::state::Address;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::Value;

/// Default base of the row API; the table id and query follow it
pub const DEFAULT_API_BASE_URL: &str = "https://base.rubensgouveia.com.br/api/database/rows/table";

/// Default postal-code lookup service
pub const DEFAULT_ADDRESS_LOOKUP_URL: &str = "https://viacep.com.br/ws";

/// Client for the tabular-data API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Row creation endpoint for a table
    pub fn row_url(&self, table_id: u32) -> String {
        format!(
            "{}/{}/?user_field_names=true",
            self.base_url.trim_end_matches('/'),
            table_id
        )
    }
}

#[async_trait]
impl RowSubmitter for ApiClient {
    async fn create_row(&self, table_id: u32, row: Value) -> Result<(), ApiError> {
        let mut request = self.http.post(self.row_url(table_id)).json(&row);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Token {token}"));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(table_id, status = status.as_u16(), "row API rejected submission");
            return Err(ApiError::Status(status.as_u16()));
        }

        tracing::info!(table_id, "row created");
        Ok(())
    }
}

/// Client for the ViaCEP postal-code service
pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn lookup_url(&self, postal_code: &str) -> String {
        format!(
            "{}/{}/json/",
            self.base_url.trim_end_matches('/'),
            postal_code
        )
    }
}

#[async_trait]
impl AddressLookup for ViaCepClient {
    async fn lookup(&self, postal_code: &str) -> Result<Option<Address>, LookupError> {
        let response = self.http.get(self.lookup_url(postal_code)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        parse_lookup_body(&body)
    }
}

/// Lookup response body; only the fields the form uses
#[derive(Debug, Deserialize)]
struct LookupBody {
    #[serde(default)]
    erro: Option<Value>,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

/// Parse a lookup body. A truthy `erro` flag means the code does not exist.
pub fn parse_lookup_body(body: &str) -> Result<Option<Address>, LookupError> {
    let body: LookupBody = serde_json::from_str(body)?;

    if body.erro.as_ref().is_some_and(is_truthy) {
        return Ok(None);
    }

    Ok(Some(Address {
        street: body.logradouro,
        neighborhood: body.bairro,
        city: body.localidade,
        region: body.uf,
    }))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
