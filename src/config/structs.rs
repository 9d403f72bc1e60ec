use serde::{Deserialize, Serialize};

use crate::errors::{ConvertError, Result};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "shorturl.toml";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "SU";

pub const DEFAULT_SINA_SHORTEN_API: &str = "http://api.t.sina.com.cn/short_url/shorten.json";
pub const DEFAULT_SINA_EXPAND_API: &str = "http://api.t.sina.com.cn/short_url/expand.json";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - sina: 新浪 API 地址与 APP Key
/// - http: HTTP 客户端超时与连接池
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub sina: SinaConfig,
    #[serde(default)]
    pub http: HttpClientConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// ENV 前缀：SU，分隔符：__
    /// 示例：SU__SINA__APP_KEY=123456
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖，前缀 SU，分隔符 __
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<StaticConfig>()?;
        if std::path::Path::new(path).exists() {
            tracing::debug!("Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        Self::default().to_toml()
    }

    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self)
            .unwrap_or_else(|e| format!("# Error generating config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConvertError::config(format!("serialize config: {}", e)))?;

        // Create parent directories if needed
        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConvertError::config(format!("{}: {}", parent.display(), e)))?;
        }

        std::fs::write(path.as_ref(), content)
            .map_err(|e| ConvertError::config(format!("{}: {}", path.as_ref().display(), e)))?;
        Ok(())
    }
}

/// 新浪短网址 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SinaConfig {
    /// APP Key，作为 source 参数传递
    #[serde(default = "default_sina_app_key")]
    pub app_key: String,
    #[serde(default = "default_sina_shorten_api")]
    pub shorten_api: String,
    #[serde(default = "default_sina_expand_api")]
    pub expand_api: String,
    /// 每次请求携带的网址数量，超过 20 按 20 处理
    #[serde(default = "default_sina_batch_limit")]
    pub batch_limit: usize,
}

/// HTTP 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HttpClientConfig {
    #[serde(default = "default_http_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_http_max_idle_connections")]
    pub max_idle_connections: usize,
    #[serde(default = "default_http_user_agent")]
    pub user_agent: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_sina_app_key() -> String {
    "3271760578".to_string()
}

fn default_sina_shorten_api() -> String {
    DEFAULT_SINA_SHORTEN_API.to_string()
}

fn default_sina_expand_api() -> String {
    DEFAULT_SINA_EXPAND_API.to_string()
}

fn default_sina_batch_limit() -> usize {
    20
}

fn default_http_timeout_secs() -> u64 {
    10
}

fn default_http_max_idle_connections() -> usize {
    100
}

fn default_http_user_agent() -> String {
    concat!("shorturl/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for SinaConfig {
    fn default() -> Self {
        Self {
            app_key: default_sina_app_key(),
            shorten_api: default_sina_shorten_api(),
            expand_api: default_sina_expand_api(),
            batch_limit: default_sina_batch_limit(),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_http_timeout_secs(),
            max_idle_connections: default_http_max_idle_connections(),
            user_agent: default_http_user_agent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
