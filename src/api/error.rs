//! Errors raised at the HTTP seams

use thiserror::Error;

/// Failure to store a submitted row
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-2xx status
    #[error("Erro na API: {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("Falha de conexão: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Failure to resolve a postal code (other than "not found")
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("address lookup request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("address lookup returned status {0}")]
    Status(u16),

    #[error("address lookup returned an unreadable body: {0}")]
    Decode(#[from] serde_json::Error),
}
