//! Client SDK for the FinTrack personal finance backend.
//!
//! Fetches the transaction list and balance snapshot from the backend,
//! normalizes them into display-ready records, maintains per-column sort
//! state over the list, and imports batches of spreadsheet files as a
//! concurrent all-or-nothing unit.
//!
//! # Quick start
//!
//! ```no_run
//! use fintrack_sdk::{FintrackSdk, SortKey, UploadBatch};
//!
//! # async fn example() -> fintrack_sdk::Result<()> {
//! let sdk = FintrackSdk::builder()
//!     .base_url("http://localhost:3333")
//!     .build()?;
//!
//! // Load the dashboard and reorder it by amount
//! let mut dashboard = sdk.load_dashboard().await?;
//! dashboard.sort_by(SortKey::Value);
//!
//! // Stage spreadsheets and import them in one batch
//! let mut batch = UploadBatch::new();
//! batch.stage("march.csv", std::fs::read("march.csv")?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod gateway;
pub mod import;
pub mod models;
pub mod normalize;
pub mod sort;

pub use dashboard::Dashboard;
pub use error::{FintrackError, Result};
pub use gateway::Gateway;
pub use import::{
    BatchImporter, FileImportResult, ImportReport, Navigator, PendingUpload, UploadBatch,
};
pub use sort::{SortDirection, SortKey, SortState};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// FintrackSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`FintrackSdk`] instance.
///
/// Use [`FintrackSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](FintrackSdkBuilder::build) to create the SDK.
pub struct FintrackSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for FintrackSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl FintrackSdkBuilder {
    /// Set the backend base URL, e.g. `http://localhost:3333`. Required.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout, applied to the fetch and to each
    /// upload. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK, constructing the HTTP gateway.
    pub fn build(self) -> Result<FintrackSdk> {
        let base_url = self
            .base_url
            .ok_or_else(|| FintrackError::InvalidArgument("base_url is required".into()))?;
        let gateway = Gateway::new(base_url, self.timeout)?;
        Ok(FintrackSdk { gateway })
    }
}

// ---------------------------------------------------------------------------
// FintrackSdk
// ---------------------------------------------------------------------------

/// The main entry point for the FinTrack client SDK.
///
/// Wraps the HTTP [`Gateway`] and hands out the dashboard view-model and the
/// batch importer. Created via [`FintrackSdk::builder()`].
pub struct FintrackSdk {
    gateway: Gateway,
}

impl FintrackSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> FintrackSdkBuilder {
        FintrackSdkBuilder::default()
    }

    /// Fetch the backend state into a fresh [`Dashboard`].
    ///
    /// Equivalent to [`Dashboard::new()`] followed by
    /// [`Dashboard::refresh()`].
    pub async fn load_dashboard(&self) -> Result<Dashboard> {
        let mut dashboard = Dashboard::new();
        dashboard.refresh(&self.gateway).await?;
        Ok(dashboard)
    }

    /// Access the batch import interface.
    ///
    /// Returns a lightweight wrapper that borrows the underlying gateway.
    pub fn importer(&self) -> BatchImporter<'_> {
        BatchImporter::new(&self.gateway)
    }

    /// Return a reference to the underlying [`Gateway`] for advanced usage.
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for FintrackSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FintrackSdk(base_url={})", self.gateway.base_url())
    }
}
