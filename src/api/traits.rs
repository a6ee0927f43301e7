//! Trait abstraction for the remote collaborators to enable mocking in tests

use super::error::{ApiError, LookupError};
use crate::state::Address;
use async_trait::async_trait;

/// Inserts rows into the remote tabular-data API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RowSubmitter: Send + Sync {
    /// Create a row in `table_id`. Succeeds only on a 2xx response.
    async fn create_row(&self, table_id: u32, row: serde_json::Value) -> Result<(), ApiError>;
}

/// Resolves Brazilian postal codes to addresses
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Look up 8 postal-code digits. `Ok(None)` means the code does not exist.
    async fn lookup(&self, postal_code: &str) -> Result<Option<Address>, LookupError>;
}
