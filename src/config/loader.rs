use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "KCAP_";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序（后者覆盖前者）：
    /// 1. 内置预设（`KCAP_ENV=production` 时使用生产预设）
    /// 2. ./config.toml
    /// 3. `KCAP_` 前缀的环境变量，嵌套字段以 `__` 分隔
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, figment::Error> {
        Self::figment(path.as_ref()).extract()
    }

    fn figment(path: &Path) -> Figment {
        let base = match std::env::var(format!("{ENV_PREFIX}ENV")) {
            Ok(env) if env.eq_ignore_ascii_case("production") => AppConfig::production(),
            _ => AppConfig::development(),
        };

        Figment::from(Serialized::defaults(base))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["ENV"]).split("__"))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.server.host.trim().is_empty() {
            return Err(ConfigValidationError::MissingHost);
        }

        if config.is_production() && config.store.enable_test_reset {
            return Err(ConfigValidationError::TestResetInProduction);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("服务地址未配置")]
    MissingHost,

    #[error("生产环境不允许启用 test-reset 路由")]
    TestResetInProduction,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}
