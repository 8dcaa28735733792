//! 应用层：路由装配与共享状态

pub mod catalog;

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::HttpConfig;
use crate::core::middleware::request_logging_middleware;
use catalog::{handler, Catalog, CatalogService};

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog_service: CatalogService::new(Arc::new(catalog)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::seed())
    }
}

/// 创建路由
pub fn router(state: AppState, config: &HttpConfig) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/api/items", get(handler::list_items))
        .route("/api/items/:id", get(handler::get_item))
        .fallback(handler::not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeout_seconds)))
        .with_state(state)
}
