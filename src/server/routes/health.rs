//! Health check and version endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use std::borrow::Cow;
use tracing::{debug, warn};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

/// Health check endpoint
///
/// Reports store connectivity and the state of the processing pool.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let store = state.items.store();
    let store_healthy = match store.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Store health check failed: {}", e);
            false
        }
    };

    let healthy = store_healthy && state.pool.is_running();
    let status = HealthStatus {
        status: Cow::Borrowed(if healthy { "healthy" } else { "unhealthy" }),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        storage: StorageHealth {
            backend: store.backend_name(),
            healthy: store_healthy,
        },
        processing: PoolHealth {
            pool_size: state.pool.size(),
            running: state.pool.is_running(),
        },
    };

    if healthy {
        HttpResponse::Ok().json(ApiResponse::success(status))
    } else {
        HttpResponse::ServiceUnavailable()
            .json(ApiResponse::failure("Service unhealthy".to_string(), status))
    }
}

/// Version info endpoint
async fn version_info() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(crate::build_info()))
}

#[derive(Debug, Clone, serde::Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
    storage: StorageHealth,
    processing: PoolHealth,
}

#[derive(Debug, Clone, serde::Serialize)]
struct StorageHealth {
    backend: &'static str,
    healthy: bool,
}

#[derive(Debug, Clone, serde::Serialize)]
struct PoolHealth {
    pool_size: usize,
    running: bool,
}
