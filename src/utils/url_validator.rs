//! 长网址校验
//!
//! 缩短前检查输入：只接受 http/https，拒绝脚本类协议

use url::Url;

use crate::errors::ConvertError;

/// 网址校验错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidationError {
    EmptyUrl,
    DangerousProtocol(String),
    UnsupportedProtocol(String),
    InvalidFormat(String),
    MissingHost,
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::DangerousProtocol(proto) => write!(f, "Dangerous protocol blocked: {}", proto),
            Self::UnsupportedProtocol(proto) => write!(
                f,
                "Unsupported protocol: {}. Only http:// and https:// can be shortened",
                proto
            ),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
            Self::MissingHost => write!(f, "URL has no host"),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 危险协议列表
const DANGEROUS_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

/// 校验单个长网址，返回解析后的 `Url`
pub fn validate_url(raw: &str) -> Result<Url, UrlValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    // 先按前缀判断协议，避免 "javascript:..." 之类在解析阶段报成格式错误
    if let Some((scheme, _)) = raw.split_once(':') {
        let scheme = scheme.to_ascii_lowercase();
        if DANGEROUS_SCHEMES.contains(&scheme.as_str()) {
            return Err(UrlValidationError::DangerousProtocol(format!("{}:", scheme)));
        }
    }

    let url = Url::parse(raw).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedProtocol(format!("{}:", other))),
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(url)
}

/// 批量校验，返回第一个不合法的网址及原因
pub fn validate_urls<S: AsRef<str>>(urls: &[S]) -> Result<(), ConvertError> {
    for url in urls {
        validate_url(url.as_ref()).map_err(|e| {
            ConvertError::validation(format!("{}: {}", url.as_ref(), e))
        })?;
    }
    Ok(())
}
