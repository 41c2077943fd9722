//! Thin async HTTP client for the FinTrack backend.
//!
//! Two calls: the combined transaction list + balance fetch, and the
//! per-file multipart import. Everything else in the crate is pure logic on
//! top of these.

use std::time::Duration;

use tracing::debug;

use crate::config;
use crate::error::Result;
use crate::models::TransactionsResponse;

/// HTTP gateway to the backend. Cheap to clone; clones share the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
}

impl Gateway {
    /// Create a gateway for the backend at `base_url`.
    ///
    /// `timeout` applies per request. A trailing slash on the base URL is
    /// tolerated.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the raw transaction list and balance snapshot.
    ///
    /// The body is decoded explicitly so transport failures (`Http`) and
    /// malformed payloads (`Json`) stay distinct in the error taxonomy.
    pub async fn transactions(&self) -> Result<TransactionsResponse> {
        let url = self.url(config::TRANSACTIONS_PATH);
        debug!(%url, "fetching transactions");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Upload one staged spreadsheet as a multipart request.
    ///
    /// The bytes are bound under the fixed field name the backend expects,
    /// with the staged file name attached. A non-2xx status fails the call.
    pub async fn import_file(&self, name: &str, contents: Vec<u8>) -> Result<()> {
        let url = self.url(config::IMPORT_PATH);
        debug!(%url, file = name, bytes = contents.len(), "uploading spreadsheet");

        let part = reqwest::multipart::Part::bytes(contents).file_name(name.to_owned());
        let form = reqwest::multipart::Form::new().part(config::UPLOAD_FIELD, part);

        self.client
            .post(&url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
