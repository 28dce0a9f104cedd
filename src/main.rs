mod api_doc;
mod assembler;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod seed;
mod state;
mod store;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_doc::ApiDoc;
use config::Config;
use state::AppState;

/// Assemble the application router: resource routes, Swagger UI and request
/// tracing.
fn app(state: AppState) -> Router {
    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::EMPLOYEES,
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            routes::EMPLOYEE,
            get(handlers::get_employee)
                .put(handlers::replace_employee)
                .delete(handlers::delete_employee),
        )
        .route(routes::ORDERS, get(handlers::list_orders))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("payroll-api starting");

    let config = Config::from_env()?;
    let state = AppState::new(config);
    state.config.log_startup();

    seed::preload(&state)?;

    let addr = format!(
        "{}:{}",
        state.config.service_host, state.config.service_port
    );
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
