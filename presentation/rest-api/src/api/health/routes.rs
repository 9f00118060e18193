use chrono::Utc;
use poem_openapi::{ApiResponse, Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the database answers, "degraded" otherwise
    pub status: String,
    /// Whether the database answered a ping
    pub database: bool,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

#[derive(ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Healthy(Json<HealthCheckResponse>),
    #[oai(status = 503)]
    Degraded(Json<HealthCheckResponse>),
}

/// Health API used by load balancers and container probes.
pub struct Api {
    pool: PgPool,
}

impl Api {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Pings the database and reports the service status.
    /// Public, no authentication.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> HealthResponse {
        let database = sqlx::query("SELECT 1").execute(&self.pool).await.is_ok();
        if !database {
            tracing::warn!("Health check: database unreachable");
        }

        let body = HealthCheckResponse {
            status: if database { "healthy" } else { "degraded" }.to_string(),
            database,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        if database {
            HealthResponse::Healthy(Json(body))
        } else {
            HealthResponse::Degraded(Json(body))
        }
    }
}
