//! HTTP 传输层
//!
//! - `request`: 不可变的单次请求配置
//! - `client`: 带连接池的阻塞式客户端

mod client;
mod request;

pub use client::{HttpClient, UreqClient};
pub use request::{DEFAULT_CONTENT_TYPE, HttpMethod, RequestConfig, RequestConfigBuilder};
