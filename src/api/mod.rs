//! HTTP collaborators: the row API and the postal-code lookup

mod client;
mod error;
mod traits;

pub use client::{ApiClient, ViaCepClient, DEFAULT_ADDRESS_LOOKUP_URL, DEFAULT_API_BASE_URL};
pub use error::{ApiError, LookupError};
pub use traits::{AddressLookup, RowSubmitter};

#[cfg(test)]
pub use traits::{MockAddressLookup, MockRowSubmitter};
