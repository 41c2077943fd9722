//! Shared test fixtures for the FinTrack SDK integration tests.
//!
//! Provides `spawn_backend()`, a local axum stand-in for the FinTrack
//! backend bound to an ephemeral port. It serves a canned `/transactions`
//! payload (swappable per test) and a multipart `/transactions/import`
//! endpoint that records uploaded file names. Files whose name contains
//! `"reject"` are refused, for failure injection.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};

use fintrack_sdk::models::{Category, Transaction, TransactionType};

// ---------------------------------------------------------------------------
// FixtureBackend
// ---------------------------------------------------------------------------

/// Handle to the fixture backend's observable state.
#[derive(Clone)]
pub struct FixtureBackend {
    uploads: Arc<Mutex<Vec<String>>>,
    transactions_body: Arc<Mutex<String>>,
    fail_transactions: Arc<AtomicBool>,
}

impl FixtureBackend {
    /// File names accepted by the import endpoint so far, in arrival order.
    pub fn uploaded_names(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    /// Replace the body served by `GET /transactions`.
    pub fn set_transactions_body(&self, body: impl Into<String>) {
        *self.transactions_body.lock().unwrap() = body.into();
    }

    /// Make `GET /transactions` answer 500 until called with `false`.
    pub fn set_fail_transactions(&self, fail: bool) {
        self.fail_transactions.store(fail, Ordering::SeqCst);
    }
}

/// Start the fixture backend on an ephemeral port.
///
/// Returns the base URL and the state handle.
pub async fn spawn_backend() -> (String, FixtureBackend) {
    let state = FixtureBackend {
        uploads: Arc::new(Mutex::new(Vec::new())),
        transactions_body: Arc::new(Mutex::new(sample_payload().to_string())),
        fail_transactions: Arc::new(AtomicBool::new(false)),
    };

    let app = Router::new()
        .route("/transactions", get(transactions))
        .route("/transactions/import", post(import))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), state)
}

async fn transactions(State(state): State<FixtureBackend>) -> impl IntoResponse {
    if state.fail_transactions.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, String::new()).into_response();
    }
    let body = state.transactions_body.lock().unwrap().clone();
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn import(State(state): State<FixtureBackend>, mut multipart: Multipart) -> StatusCode {
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        let _contents = field.bytes().await.unwrap();
        if name.contains("reject") {
            return StatusCode::UNPROCESSABLE_ENTITY;
        }
        state.uploads.lock().unwrap().push(name);
    }
    StatusCode::NO_CONTENT
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// The canned `GET /transactions` payload: three transactions in a fixed
/// server order plus a balance snapshot.
pub fn sample_payload() -> serde_json::Value {
    serde_json::json!({
        "transactions": [
            {
                "id": "tx-001",
                "title": "Website hosting",
                "value": 120.0,
                "type": "outcome",
                "category": { "title": "Infrastructure" },
                "created_at": "2020-04-10T12:00:00Z"
            },
            {
                "id": "tx-002",
                "title": "Freelance gig",
                "value": 3000.0,
                "type": "income",
                "category": { "title": "Work" },
                "created_at": "2020-05-02T09:30:00Z"
            },
            {
                "id": "tx-003",
                "title": "Computer parts",
                "value": 500.0,
                "type": "outcome",
                "category": { "title": "Equipment" },
                "created_at": "2020-05-24T00:00:00Z"
            }
        ],
        "balance": {
            "income": "3000.00",
            "outcome": "620.00",
            "total": "2380.00"
        }
    })
}

/// Build a raw transaction for pure (non-HTTP) tests.
pub fn raw_transaction(
    id: &str,
    title: &str,
    value: f64,
    kind: TransactionType,
    category: &str,
    created_at: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        title: title.to_string(),
        value,
        kind,
        category: Category {
            title: category.to_string(),
        },
        created_at: created_at.to_string(),
    }
}
