use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod services;

use config::Config;
use db::{InMemoryMoodStore, MoodStore, PgMoodStore};
use services::quotes::QuoteService;
use services::text_gen::ClaudeGenerator;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MoodStore>,
    pub config: Arc<Config>,
    pub quotes: Arc<QuoteService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodarc_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env());
    tracing::info!(timezone = %config.timezone, "Using reference timezone for day keys");

    let store: Arc<dyn MoodStore> = match &config.database_url {
        Some(url) => {
            let db = db::create_pool(url, config.database_max_connections).await?;
            sqlx::migrate!("./migrations").run(&db).await?;
            tracing::info!("Database migrations applied");
            Arc::new(PgMoodStore::new(db))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, mood entries will only be kept in memory");
            Arc::new(InMemoryMoodStore::new())
        }
    };

    if config.claude_api_key.is_empty() {
        tracing::warn!("CLAUDE_API_KEY not set, quotes will come from the fallback pool");
    }
    let generator = Arc::new(ClaudeGenerator::new(
        config.claude_api_key.clone(),
        config.claude_model.clone(),
    ));
    let quotes = Arc::new(QuoteService::new(
        generator,
        config.quote_failure_limit,
        Duration::from_secs(config.quote_timeout_secs),
    ));

    let state = AppState {
        store,
        config: config.clone(),
        quotes,
    };

    let app = build_router(state);

    let addr = config.listen_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        // Mood log
        .route(
            "/api/users/:owner_id/moods",
            put(handlers::moods::upsert_mood).get(handlers::moods::list_moods),
        )
        .route(
            "/api/users/:owner_id/moods/:day",
            get(handlers::moods::get_mood),
        )
        // Streaks & charts
        .route(
            "/api/users/:owner_id/streak",
            get(handlers::stats::get_streak),
        )
        .route(
            "/api/users/:owner_id/stats/daily",
            get(handlers::stats::get_daily_buckets),
        )
        .route(
            "/api/users/:owner_id/stats/weekly",
            get(handlers::stats::get_weekly_review),
        )
        // Quotes
        .route("/api/quotes/next", get(handlers::quotes::next_quote));

    routes
        .layer(cors_layer(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    let allowed_origins: Vec<axum::http::HeaderValue> = std::iter::once(&config.frontend_url)
        .chain(config.cors_extra_origins.iter())
        .filter_map(|o| match o.parse::<axum::http::HeaderValue>() {
            Ok(hv) => Some(hv),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::PUT,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
}
