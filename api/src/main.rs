//! Sandbox API Server
//!
//! Demo services for exercising test doubles: users, books, a product
//! catalogue, greetings and a small data pipeline. Uses hexagonal (ports &
//! adapters) architecture so every collaborator can be swapped in tests.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{FixedDataService, InMemoryUserRepository, PostgresUserRepository};
use app::{
    BookService, DataProcessor, ListManager, ProductCatalogue, StaticGreetingService, UserService,
};
use config::Config;
use domain::ports::{DataService, GreetingService, ListManagement, UserRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<dyn UserRepository>>,
    pub book_service: Arc<BookService>,
    pub data_processor: Arc<DataProcessor<dyn DataService>>,
    pub greeting_service: Arc<dyn GreetingService>,
    pub list_manager: Arc<dyn ListManagement>,
    pub product_catalogue: Arc<ProductCatalogue>,
}

impl AppState {
    /// Wire the services over the given collaborators
    ///
    /// Books and products are fixed catalogues and always use their defaults.
    pub fn new(
        users: Arc<dyn UserRepository>,
        data_service: Arc<dyn DataService>,
        greeting_service: Arc<dyn GreetingService>,
        list_manager: Arc<dyn ListManagement>,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users)),
            book_service: Arc::new(BookService::default()),
            data_processor: Arc::new(DataProcessor::new(data_service)),
            greeting_service,
            list_manager,
            product_catalogue: Arc::new(ProductCatalogue::default()),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with every endpoint and the shared middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::hello))
        .route("/health", get(health))
        .route("/greeting", get(handlers::greeting))
        // Users
        .route("/api/users", get(handlers::list_users))
        .route("/api/users/:id", get(handlers::get_user))
        // Books
        .route("/api/books", get(handlers::list_books))
        .route("/api/books/:id", get(handlers::get_book))
        // Catalogue
        .route("/api/catalogue/products", get(handlers::list_products))
        // Data pipeline
        .route("/api/data/processed", get(handlers::processed))
        .route("/api/data/sum", post(handlers::report_sum))
        // List store
        .route(
            "/api/list",
            get(handlers::item_count).post(handlers::add_item),
        )
        .route("/api/list/size", post(handlers::list_size))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sandbox_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sandbox API...");

    // Load configuration
    let config = Config::from_env();

    // Users come from PostgreSQL when configured, otherwise from memory
    let users: Arc<dyn UserRepository> = match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connected");
            Arc::new(PostgresUserRepository::new(db))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, serving seeded in-memory users");
            Arc::new(InMemoryUserRepository::seeded())
        }
    };

    let state = AppState::new(
        users,
        Arc::new(FixedDataService::new(config.data_service_value)),
        Arc::new(StaticGreetingService::default()),
        Arc::new(ListManager::new()),
    );

    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
