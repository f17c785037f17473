use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式（JSON）
    pub structured: bool,
    /// 日志文件目录，未设置时仅输出到标准输出
    pub log_dir: Option<PathBuf>,
}

/// 模拟网络延迟配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LatencyConfig {
    /// 每个请求响应前的固定延迟（毫秒），0 表示关闭
    pub delay_ms: u64,
}

impl LatencyConfig {
    /// 延迟时长
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// 条目存储配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// 启动时载入示例条目
    pub seed_on_startup: bool,
    /// 暴露 /api/test-reset 路由（仅限测试环境）
    pub enable_test_reset: bool,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 延迟模拟配置
    pub latency: LatencyConfig,
    /// 存储配置
    pub store: StoreConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 8080,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
                log_dir: None,
            },
            latency: LatencyConfig { delay_ms: 300 },
            store: StoreConfig {
                seed_on_startup: true,
                enable_test_reset: true,
            },
            app_name: "knowledge-capture".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config.latency.delay_ms = 0;
        config.store.enable_test_reset = false;
        config
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}
