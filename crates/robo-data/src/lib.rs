//! HTTP client and REST catalogue source for RoboShop.
//!
//! Provides a small GET builder over `reqwest` with JSON helpers, and
//! [`HttpCatalogue`], which loads the storefront catalogue from a REST
//! endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use robo_data::{FetchClient, HttpCatalogue};
//! use robo_commerce::prelude::*;
//!
//! let client = FetchClient::new();
//! let records: Vec<serde_json::Value> = client
//!     .get("http://localhost:8080/api/catalogue")
//!     .accept("application/json")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//!
//! let mut store = Storefront::new(Currency::USD);
//! store
//!     .load_catalogue(&HttpCatalogue::new("http://localhost:8080/api/catalogue"))
//!     .await;
//! ```

mod catalogue;
mod error;
mod response;

pub use catalogue::{CatalogueRecord, HttpCatalogue, RecordId, DEFAULT_CATALOGUE_ENDPOINT};
pub use error::{FetchError, RecordError};
pub use response::Response;

/// HTTP client for outbound requests.
///
/// Wraps a `reqwest::Client`, which is cheap to clone and shares its
/// connection pool.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    inner: reqwest::Client,
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl AsRef<str>) -> ClientRequestBuilder {
        let url = url.as_ref().to_string();
        ClientRequestBuilder {
            builder: self.inner.get(&url),
            url,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: reqwest::RequestBuilder,
    url: String,
}

impl ClientRequestBuilder {
    /// Set the Accept header.
    pub fn accept(mut self, content_type: &str) -> Self {
        self.builder = self.builder.header(reqwest::header::ACCEPT, content_type);
        self
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        tracing::debug!(url = %self.url, "sending request");
        let response = self.builder.send().await?;
        Response::read(response).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, HttpCatalogue, Response};
}
