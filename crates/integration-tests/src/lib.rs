//! Integration test harness for HomeCraft.
//!
//! Each [`TestContext`] spins up the full site on an ephemeral port with
//! its own in-memory database, plus a stub service backend so checkout
//! flows run without the real external endpoint.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    routing::post,
};
use reqwest::{Client, redirect};
use secrecy::SecretString;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use homecraft_site::config::{GatewayConfig, SiteConfig};
use homecraft_site::state::AppState;
use homecraft_site::{build_app, db};

/// Behavior of the stub service backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayMode {
    /// Answer every operation successfully.
    Ok,
    /// Answer with a non-success envelope status.
    FailStatus,
}

/// Stub backend handler speaking the gateway envelope protocol.
async fn gateway_handler(State(mode): State<GatewayMode>, Json(request): Json<Value>) -> Json<Value> {
    if mode == GatewayMode::FailStatus {
        return Json(json!({"statusCode": 500, "body": Value::Null}));
    }

    match request["operation"].as_str() {
        Some("get_service_details") => {
            let name = request["service_name"].as_str().unwrap_or_default();
            let cost = match name {
                "Flooring" => 100,
                "Roofing" => 50,
                _ => 75,
            };
            let details = json!({
                "service_name": name,
                "description": format!("Professional {name} services."),
                "cost": cost,
            });

            // The backend double-encodes: the envelope body is a JSON string.
            Json(json!({"statusCode": 200, "body": details.to_string()}))
        }
        Some("add_order") => Json(json!({"statusCode": 200, "body": "{}"})),
        _ => Json(json!({"statusCode": 400, "body": Value::Null})),
    }
}

/// Start the stub backend on an ephemeral port, returning its URL.
async fn spawn_gateway(mode: GatewayMode) -> String {
    let app = Router::new()
        .route("/", post(gateway_handler))
        .with_state(mode);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub gateway");
    let addr = listener.local_addr().expect("Failed to get gateway addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub gateway error");
    });

    format!("http://{addr}/")
}

/// A running site instance with its own database and stub backend.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
    pub pool: SqlitePool,
}

impl TestContext {
    /// Start a fresh site with the stub backend in the given mode.
    pub async fn new(mode: GatewayMode) -> Self {
        let gateway_url = spawn_gateway(mode).await;

        // One connection keeps the in-memory database alive and shared.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test pool");

        db::MIGRATOR
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let config = SiteConfig {
            database_url: SecretString::from("sqlite::memory:"),
            host: "127.0.0.1".parse().expect("valid host"),
            port: 0,
            gateway: GatewayConfig {
                endpoint: gateway_url,
                timeout: Duration::from_secs(5),
            },
        };

        let state =
            AppState::new(config, pool.clone()).expect("Failed to build application state");
        let app = build_app(state).await.expect("Failed to build application");

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind site");
        let addr: SocketAddr = listener.local_addr().expect("Failed to get site addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Site server error");
        });

        // Redirects are assertions in these tests, so don't follow them.
        let client = Client::builder()
            .cookie_store(true)
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("http://{addr}"),
            pool,
        }
    }

    /// Absolute URL for a site path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Submit the signup form for a new account.
    pub async fn signup(&self, username: &str, password: &str) -> reqwest::Response {
        // Mobile numbers are unique per account; derive one per username.
        let mobile = format!("085{:07}", username.bytes().map(u64::from).sum::<u64>());

        self.client
            .post(self.url("/signup"))
            .form(&[
                ("username", username),
                ("email", &format!("{username}@example.com")),
                ("name", "Test Customer"),
                ("mobile_number", &mobile),
                ("password", password),
                ("confirm_password", password),
            ])
            .send()
            .await
            .expect("Signup request failed")
    }

    /// Submit the login form.
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Login request failed")
    }

    /// Append a line item to the session cart.
    pub async fn add_to_cart(&self, service: &str, cost: &str) -> reqwest::Response {
        self.client
            .post(self.url("/add_to_cart"))
            .form(&[("service", service), ("cost", cost)])
            .send()
            .await
            .expect("Add-to-cart request failed")
    }
}
