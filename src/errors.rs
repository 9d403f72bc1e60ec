use std::fmt;
use std::sync::Arc;

/// 网址转换错误
///
/// 传输失败、调用方参数错误、服务商返回的错误统一用此类型向上抛出
#[derive(Debug, Clone)]
pub enum ConvertError {
    Validation(String),
    Transport {
        message: String,
        cause: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },
    Provider(String),
    Decode(String),
    MissingResult(String),
    Config(String),
}

impl ConvertError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::Validation(_) => "E001",
            ConvertError::Transport { .. } => "E002",
            ConvertError::Provider(_) => "E003",
            ConvertError::Decode(_) => "E004",
            ConvertError::MissingResult(_) => "E005",
            ConvertError::Config(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ConvertError::Validation(_) => "Validation Error",
            ConvertError::Transport { .. } => "Transport Error",
            ConvertError::Provider(_) => "Provider Error",
            ConvertError::Decode(_) => "Decode Error",
            ConvertError::MissingResult(_) => "Missing Result",
            ConvertError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    ///
    /// `Provider` 的详情是服务商返回的原始响应体
    pub fn message(&self) -> &str {
        match self {
            ConvertError::Validation(msg) => msg,
            ConvertError::Transport { message, .. } => message,
            ConvertError::Provider(body) => body,
            ConvertError::Decode(msg) => msg,
            ConvertError::MissingResult(url) => url,
            ConvertError::Config(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI）
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        let mut out = format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        );
        if let ConvertError::Transport {
            cause: Some(cause), ..
        } = self
        {
            out.push_str(&format!("\n  {} {}", "caused by:".dimmed(), cause));
        }
        out
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 给传输错误换上新的描述，保留原始 cause
    ///
    /// 其他类型的错误原样返回
    pub fn relabel_transport<T: Into<String>>(self, label: T) -> Self {
        match self {
            ConvertError::Transport { message, cause } => ConvertError::Transport {
                message: format!("{}: {}", label.into(), message),
                cause,
            },
            other => other,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Transport {
                cause: Some(cause), ..
            } => Some(cause.as_ref() as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

// 便捷的构造函数
impl ConvertError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ConvertError::Validation(msg.into())
    }

    pub fn transport<T, E>(msg: T, cause: E) -> Self
    where
        T: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        ConvertError::Transport {
            message: msg.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    pub fn provider<T: Into<String>>(body: T) -> Self {
        ConvertError::Provider(body.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        ConvertError::Decode(msg.into())
    }

    pub fn missing_result<T: Into<String>>(url: T) -> Self {
        ConvertError::MissingResult(url.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ConvertError::Config(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Decode(err.to_string())
    }
}

impl From<ureq::Error> for ConvertError {
    fn from(err: ureq::Error) -> Self {
        ConvertError::transport(err.to_string(), err)
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::transport(err.to_string(), err)
    }
}

impl From<config::ConfigError> for ConvertError {
    fn from(err: config::ConfigError) -> Self {
        ConvertError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
