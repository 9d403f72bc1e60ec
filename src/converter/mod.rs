//! 网址转换层
//!
//! 调用方只面对 `UrlConverter` / `MultiUrlConverter` 两个接口，
//! 服务商差异由 `UrlShortenerProvider` 注入到通用的 `HttpUrlConverter` 中。
//!
//! ```text
//! caller → HttpUrlConverter ─ 校验 → 分批 → (逐批) provider 构造请求
//!                                           → HttpClient::send → provider 解码 → 合并
//! ```

mod batch;
mod http_converter;
mod mapping;

pub use batch::{batch_count, split_batches};
pub use http_converter::HttpUrlConverter;
pub use mapping::UrlMapping;

use crate::errors::Result;
use crate::http::{DEFAULT_CONTENT_TYPE, HttpMethod};

/// 转换方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// 长网址 → 短网址
    Shorten,
    /// 短网址 → 长网址
    Lengthen,
}

impl Direction {
    /// 用于错误描述的中文动作名
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Shorten => "缩短网址",
            Direction::Lengthen => "还原网址",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Shorten => write!(f, "shorten"),
            Direction::Lengthen => write!(f, "lengthen"),
        }
    }
}

/// 短网址转换器
pub trait UrlConverter {
    /// 缩短网址
    fn shorten(&self, long_url: &str) -> Result<String>;

    /// 还原网址
    fn lengthen(&self, short_url: &str) -> Result<String>;
}

/// 支持一次转换多个网址的转换器
///
/// 返回以入参网址为 key、转换结果为 value 的映射。
/// 服务商没有返回的网址不会出现在结果里。
pub trait MultiUrlConverter: UrlConverter {
    fn shorten_many(&self, long_urls: &[String]) -> Result<UrlMapping>;

    fn lengthen_many(&self, short_urls: &[String]) -> Result<UrlMapping>;
}

/// 服务商能力接口
///
/// 提供接口地址、请求方法、请求头、请求体以及响应解码。
/// 除 `endpoint` 与 `decode` 外都有默认实现。
pub trait UrlShortenerProvider: Send + Sync {
    /// 服务商名称（用于日志）
    fn name(&self) -> &'static str;

    /// 单次请求允许的最大网址数量（包含该值）
    fn batch_limit(&self) -> usize {
        usize::MAX
    }

    /// 构造携带 `urls` 的接口地址
    fn endpoint(&self, direction: Direction, urls: &[String]) -> Result<String>;

    fn method(&self, _direction: Direction) -> HttpMethod {
        HttpMethod::Get
    }

    fn headers(&self, _direction: Direction) -> Vec<(String, String)> {
        vec![("Content-Type".to_string(), DEFAULT_CONTENT_TYPE.to_string())]
    }

    fn request_body(&self, _direction: Direction, _urls: &[String]) -> Option<String> {
        None
    }

    /// 把接口返回内容解码为映射
    fn decode(&self, direction: Direction, body: &str) -> Result<UrlMapping>;
}
