use axum::{Router, Server, middleware::from_fn};
use diesel::{
    PgConnection,
    r2d2::{self, ConnectionManager as DbConnectionManager},
};
use roadmap_backend::{AppState, db::DbPool, generation::ChatCompletionsClient};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = match roadmap_backend::config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    roadmap_backend::init_tracing(&config);

    // Initialize database
    let manager = DbConnectionManager::<PgConnection>::new(config.db_url());
    let db: DbPool = r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .min_idle(Some(config.database_min_connections))
        .connection_timeout(Duration::from_secs(config.database_connection_timeout))
        .build(manager)
        .expect("Failed to create database connection pool");

    // Initialize Redis
    let redis =
        redis::Client::open(config.redis_url.clone()).expect("Failed to create Redis client");

    // Generation client
    let generator = ChatCompletionsClient::new(&config.generation())
        .expect("Failed to create generation client");

    let server_address = config.server_address();
    let state = Arc::new(AppState::new(db, redis, config, Arc::new(generator)));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Every route requires an authenticated caller
    let protected_routes = roadmap_backend::routes::create_router(state.clone()).layer(
        axum::middleware::from_fn_with_state(
            state.clone(),
            roadmap_backend::middleware::auth::auth_middleware,
        ),
    );

    let app = Router::new()
        .merge(protected_routes)
        .layer(cors)
        .layer(from_fn(roadmap_backend::middleware::logger::logger));

    // Start server
    let addr = server_address.parse().expect("Invalid server address");
    tracing::info!(address = %addr, "server listening");
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server failed");
}
