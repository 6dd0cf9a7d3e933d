use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use contact_relay::config::Config;
use contact_relay::notify::Notifier;
use contact_relay::store::{ContactRecord, ContactStore};

/// In-memory stand-in for the Postgres store. Flip `set_fail` to simulate a
/// storage outage.
pub struct MemoryStore {
    records: Mutex<Vec<ContactRecord>>,
    fail: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    pub fn records(&self) -> Vec<ContactRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn put(&self, record: &ContactRecord) -> Result<(), String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("simulated storage outage".to_string());
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Records sent notifications instead of talking to SMTP. Flip `set_fail` to
/// simulate delivery failure.
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
    fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    /// Sent notifications as (subject, body) pairs.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, subject: &str, body: &str) -> Result<(), String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("simulated delivery failure".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        Ok(())
    }
}

/// A running test server with fake store and notifier.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a JSON contact form, optionally with an Origin header.
    pub async fn submit(&self, body: &Value, origin: Option<&str>) -> (Value, StatusCode) {
        let resp = self.submit_response(body, origin).await;
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Same as `submit` but returns the raw response for header assertions.
    pub async fn submit_response(&self, body: &Value, origin: Option<&str>) -> reqwest::Response {
        let mut req = self.client.post(self.url("/v1/contact")).json(body);
        if let Some(origin) = origin {
            req = req.header("origin", origin);
        }
        req.send().await.expect("submit request failed")
    }

    /// Submit a raw (possibly malformed) body.
    pub async fn submit_bytes(&self, body: &'static str, origin: Option<&str>) -> reqwest::Response {
        let mut req = self
            .client
            .post(self.url("/v1/contact"))
            .header("content-type", "application/json")
            .body(body);
        if let Some(origin) = origin {
            req = req.header("origin", origin);
        }
        req.send().await.expect("submit request failed")
    }
}

/// A complete, valid submission body.
pub fn valid_form() -> Value {
    json!({
        "contact_person": "Jane",
        "email": "j@x.com",
        "phone": "555",
        "message": "Need a quote"
    })
}

/// Spawn the app on a random port with fresh fakes.
pub async fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(RecordingNotifier::new());

    let config = Config {
        database_url: "postgres://unused-in-tests".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        business_unit: "construction".to_string(),
        environment: "test".to_string(),
        log_level: "warn".to_string(),
        smtp: None,
    };

    let app = contact_relay::build_app(
        store.clone() as Arc<dyn ContactStore>,
        Some(notifier.clone() as Arc<dyn Notifier>),
        config,
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder().build().unwrap();

    TestApp {
        addr,
        client,
        store,
        notifier,
    }
}
