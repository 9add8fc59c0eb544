#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use tower::ServiceExt;

use doit_etre_api::database::PhrasesRepository;
use doit_etre_api::server::{app, AppComponents};
use doit_etre_api::testing::{InMemoryAdminRepository, InMemoryPhrasesRepository};
use doit_etre_api::types::PhraseType;

pub const ADMIN_PASSWORD: &str = "really-thoughtful-password";
pub const USER_TOKEN: &str = "e2580a5b-cabb-4387-bcea-30e9401a2aa4";

/// Repositories behind a test app, kept so tests can seed and inspect them
#[derive(Clone)]
pub struct Fakes {
    pub french: Arc<InMemoryPhrasesRepository>,
    pub english: Arc<InMemoryPhrasesRepository>,
    pub admin: Arc<InMemoryAdminRepository>,
}

impl Fakes {
    pub fn new() -> Self {
        Self {
            french: Arc::new(InMemoryPhrasesRepository::new(PhraseType::FrenchToEnglish)),
            english: Arc::new(InMemoryPhrasesRepository::new(PhraseType::EnglishToFrench)),
            admin: Arc::new(InMemoryAdminRepository::new()),
        }
    }
}

/// Same router as production, wired to in-memory repositories
pub fn build_test_app(fakes: &Fakes) -> Router {
    let phrase_repositories: Vec<Arc<dyn PhrasesRepository>> =
        vec![fakes.french.clone(), fakes.english.clone()];

    app(AppComponents {
        phrase_repositories,
        admin_repository: fakes.admin.clone(),
        admin_password: ADMIN_PASSWORD.to_string(),
        pool: None,
    })
}

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub fakes: Fakes,
}

impl TestServer {
    async fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let fakes = Fakes::new();
        let router = build_test_app(&fakes);
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .with_context(|| format!("failed to bind {}", base_url))?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self { port, base_url, fakes })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status().is_success() {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

/// A fresh server per test so fake state never leaks between tests
pub async fn spawn_server() -> Result<TestServer> {
    let server = TestServer::spawn().await?;
    server.wait_ready(Duration::from_secs(5)).await?;
    Ok(server)
}

pub fn phrases_url(server: &TestServer, segment: &str) -> String {
    format!("{}/api/phrases/{}", server.base_url, segment)
}

/// Drive the router in-process
pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("body is not utf-8")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).expect("body is not JSON")
}
