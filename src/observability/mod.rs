//! 可观测性模块
//!
//! 提供请求计数指标、结构化日志和健康检查。

use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

use crate::api::app_state::AppState;
use crate::config::config::LoggingConfig;
use crate::error::{AppError, Result};

/// 服务版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ===== Simple Metrics =====

/// 简单应用指标
pub struct AppMetrics {
    pub http_requests_total: AtomicU64,
    pub http_request_duration_ms_sum: AtomicU64,
    pub http_errors_total: AtomicU64,
    pub entries_created_total: AtomicU64,
    pub entries_updated_total: AtomicU64,
    pub entries_deleted_total: AtomicU64,
    pub started_at: DateTime<Utc>,
}

impl Default for AppMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl AppMetrics {
    pub fn new() -> Self {
        Self {
            http_requests_total: AtomicU64::new(0),
            http_request_duration_ms_sum: AtomicU64::new(0),
            http_errors_total: AtomicU64::new(0),
            entries_created_total: AtomicU64::new(0),
            entries_updated_total: AtomicU64::new(0),
            entries_deleted_total: AtomicU64::new(0),
            started_at: Utc::now(),
        }
    }

    /// 记录 HTTP 请求
    pub fn record_http_request(&self, duration_ms: u64, failed: bool) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_request_duration_ms_sum
            .fetch_add(duration_ms, Ordering::Relaxed);
        if failed {
            self.http_errors_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_entry_created(&self) {
        self.entries_created_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_entry_updated(&self) {
        self.entries_updated_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_entry_deleted(&self) {
        self.entries_deleted_total.fetch_add(1, Ordering::Relaxed);
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.started_at).num_milliseconds() as f64 / 1000.0
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self, entries: usize) -> String {
        let requests = self.http_requests_total.load(Ordering::Relaxed);
        format!(
            r#"# HELP http_requests_total Total HTTP requests
# TYPE http_requests_total counter
http_requests_total {}
# HELP http_request_duration_seconds HTTP request duration in seconds
# TYPE http_request_duration_seconds summary
http_request_duration_seconds_sum {}
http_request_duration_seconds_count {}
# HELP http_errors_total HTTP responses with status >= 400
# TYPE http_errors_total counter
http_errors_total {}
# HELP entries_created_total Entries created
# TYPE entries_created_total counter
entries_created_total {}
# HELP entries_updated_total Entries updated
# TYPE entries_updated_total counter
entries_updated_total {}
# HELP entries_deleted_total Entries deleted
# TYPE entries_deleted_total counter
entries_deleted_total {}
# HELP entries Entries currently stored
# TYPE entries gauge
entries {}
"#,
            requests,
            self.http_request_duration_ms_sum.load(Ordering::Relaxed) as f64 / 1000.0,
            requests,
            self.http_errors_total.load(Ordering::Relaxed),
            self.entries_created_total.load(Ordering::Relaxed),
            self.entries_updated_total.load(Ordering::Relaxed),
            self.entries_deleted_total.load(Ordering::Relaxed),
            entries,
        )
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
    pub entries: usize,
}

/// 获取完整健康状态
pub async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let entries = state.entry_service.count().await?;

    Ok(Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: VERSION.to_string(),
        uptime_seconds: state.metrics.uptime_seconds(),
        entries,
    }))
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// Prometheus 指标端点
pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let entries = state.entry_service.count().await?;
    Ok((StatusCode::OK, state.metrics.gather(entries)))
}

/// 版本信息端点
pub async fn version(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": VERSION,
        "uptime_seconds": state.metrics.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
}

// ===== Structured Logging =====

/// 初始化日志
///
/// `RUST_LOG` 优先于配置中的级别。设置了 `log_dir` 时按天滚动写入文件，
/// 返回的 guard 必须在进程生命周期内保持存活。
pub fn init_tracing(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AppError::Config(format!("invalid log level '{}': {}", config.level, e)))?;

    let (writer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, "knowledge-capture.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stdout), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(writer);

    let installed = if config.structured {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| AppError::Internal(format!("failed to install subscriber: {}", e)))?;

    Ok(guard)
}

// ===== Request Metrics Middleware =====

/// 记录请求指标的中间件
pub async fn metrics_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let failed = response.status().is_client_error() || response.status().is_server_error();
    state.metrics.record_http_request(duration_ms, failed);

    response
}
