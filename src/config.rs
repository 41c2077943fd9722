use std::time::Duration;

/// Path of the combined transaction list + balance snapshot endpoint.
pub const TRANSACTIONS_PATH: &str = "/transactions";

/// Path of the spreadsheet import endpoint. One request is issued per staged
/// file.
pub const IMPORT_PATH: &str = "/transactions/import";

/// Multipart field name the backend expects the file bytes under.
pub const UPLOAD_FIELD: &str = "file";

/// Default HTTP request timeout, applied to the fetch and to each upload.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
