use anyhow::Context;
use axum::{
    routing::{get, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::database::{
    AdminRepository, DatabaseManager, PgAdminRepository, PgPhrasesRepository, PhrasesRepository,
};
use crate::handlers::{self, admin::AdminState, health::HealthState, phrases::PhraseState};
use crate::types::PhraseType;

/// Everything the router needs. Built from a pool in production and from
/// in-memory repositories in tests.
pub struct AppComponents {
    pub phrase_repositories: Vec<Arc<dyn PhrasesRepository>>,
    pub admin_repository: Arc<dyn AdminRepository>,
    pub admin_password: String,
    pub pool: Option<PgPool>,
}

impl AppComponents {
    pub fn postgres(pool: PgPool, admin_password: impl Into<String>) -> Self {
        let phrase_repositories = PhraseType::ALL
            .iter()
            .map(|phrase_type| {
                Arc::new(PgPhrasesRepository::new(*phrase_type, pool.clone())) as Arc<dyn PhrasesRepository>
            })
            .collect();

        Self {
            phrase_repositories,
            admin_repository: Arc::new(PgAdminRepository::new(pool.clone())),
            admin_password: admin_password.into(),
            pool: Some(pool),
        }
    }
}

pub fn app(components: AppComponents) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health::get))
        .with_state(HealthState {
            pool: components.pool,
        })
        .merge(admin_routes(
            components.admin_repository,
            components.admin_password,
        ));

    for repository in components.phrase_repositories {
        router = router.merge(phrase_routes(repository));
    }

    router
        .fallback(handlers::not_found)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn phrase_routes(repository: Arc<dyn PhrasesRepository>) -> Router {
    use handlers::phrases;

    let base = format!("/api/phrases/{}", repository.phrase_type().route_segment());

    Router::new()
        .route(&base, get(phrases::phrases_get).post(phrases::phrases_post))
        .route(&format!("{}/:uuid", base), put(phrases::phrase_put))
        .with_state(PhraseState::new(repository))
}

fn admin_routes(repository: Arc<dyn AdminRepository>, password: String) -> Router {
    if password.is_empty() {
        tracing::warn!("ADMIN_PASSWORD is not set; /api/admin will reject every request");
    }

    Router::new()
        .route("/api/admin", get(handlers::admin::get))
        .with_state(AdminState::new(repository, password))
}

/// Connect, migrate if configured, and serve until ctrl-c
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    info!("Starting doit-etre API in {:?} mode", config.environment);

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to the database")?;

    if config.database.run_migrations {
        DatabaseManager::run_migrations(&pool)
            .await
            .context("error during migration")?;
    }

    let app = app(AppComponents::postgres(pool.clone(), config.admin.password.clone()));

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    info!("Closed database pool");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
