//! 服务商实现
//!
//! 每个服务商实现 [`UrlShortenerProvider`](crate::converter::UrlShortenerProvider)，
//! 由 [`HttpUrlConverter`](crate::converter::HttpUrlConverter) 驱动。

pub mod sina;

pub use sina::{
    LinkKind, SINA_BATCH_LIMIT, SinaErrorBody, SinaHttpUrlConverter, SinaProvider, SinaShortUrl,
    sina_converter,
};
