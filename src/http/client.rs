//! HTTP 客户端
//!
//! 基于 ureq 的阻塞式客户端，Agent 内部自带连接池，可跨调用复用

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};
use ureq::Agent;
use ureq::http::Response;

use super::request::{HttpMethod, RequestConfig};
use crate::config::HttpClientConfig;
use crate::errors::{ConvertError, Result};

/// 发送请求并返回原始响应体的传输层抽象
pub trait HttpClient: Send + Sync {
    /// 发送一次阻塞请求，返回完整的响应体文本
    ///
    /// 非 2xx 状态码不视为错误，由调用方根据响应体判断
    fn send(&self, request: &RequestConfig) -> Result<String>;
}

/// ureq 实现
pub struct UreqClient {
    agent: Agent,
    user_agent: String,
}

impl UreqClient {
    pub fn new(config: &HttpClientConfig) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .max_idle_connections(config.max_idle_connections)
            .max_idle_connections_per_host(config.max_idle_connections)
            // 服务商用 4xx 返回错误对象，需要读到响应体
            .http_status_as_error(false)
            .build()
            .into();

        debug!(
            "HTTP client ready: timeout={}s, pool={}",
            config.timeout_secs, config.max_idle_connections
        );

        Self {
            agent,
            user_agent: config.user_agent.clone(),
        }
    }

    pub fn shared(config: &HttpClientConfig) -> Arc<dyn HttpClient> {
        Arc::new(Self::new(config))
    }

    fn apply_headers<B>(
        &self,
        mut builder: ureq::RequestBuilder<B>,
        request: &RequestConfig,
    ) -> ureq::RequestBuilder<B> {
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if request.header("User-Agent").is_none() {
            builder = builder.header("User-Agent", self.user_agent.as_str());
        }
        builder
    }

    fn dispatch(&self, request: &RequestConfig) -> Result<Response<ureq::Body>> {
        let url = request.url();
        let response = match request.method() {
            HttpMethod::Get => self.apply_headers(self.agent.get(url), request).call()?,
            HttpMethod::Delete => self.apply_headers(self.agent.delete(url), request).call()?,
            HttpMethod::Head => self.apply_headers(self.agent.head(url), request).call()?,
            HttpMethod::Options => self.apply_headers(self.agent.options(url), request).call()?,
            HttpMethod::Post => {
                Self::send_body(self.apply_headers(self.agent.post(url), request), request)?
            }
            HttpMethod::Put => {
                Self::send_body(self.apply_headers(self.agent.put(url), request), request)?
            }
            HttpMethod::Patch => {
                Self::send_body(self.apply_headers(self.agent.patch(url), request), request)?
            }
        };
        Ok(response)
    }

    fn send_body(
        builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
        request: &RequestConfig,
    ) -> std::result::Result<Response<ureq::Body>, ureq::Error> {
        match request.body() {
            Some(body) => builder.send(body),
            None => builder.send_empty(),
        }
    }
}

impl HttpClient for UreqClient {
    fn send(&self, request: &RequestConfig) -> Result<String> {
        trace!("{} {}", request.method(), request.url());

        let response = self.dispatch(request)?;
        let status = response.status();
        let body = response.into_body().read_to_string()?;

        if !status.is_success() {
            debug!(
                "{} {} returned status {}",
                request.method(),
                request.url(),
                status
            );
            // JSON 响应体交给服务商解码；其他内容直接带上状态码报错
            if !looks_like_json(&body) {
                return Err(ConvertError::decode(format!(
                    "HTTP {} with non-JSON body: {}",
                    status,
                    body_preview(&body)
                )));
            }
        }
        trace!("Response body: {}", body);

        Ok(body)
    }
}

fn looks_like_json(body: &str) -> bool {
    matches!(body.trim_start().chars().next(), Some('{' | '['))
}

const PREVIEW_CHARS: usize = 200;

fn body_preview(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "<empty>".to_string();
    }
    let mut preview: String = body.chars().take(PREVIEW_CHARS).collect();
    if body.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_json() {
        assert!(looks_like_json("[]"));
        assert!(looks_like_json("  {\"error\":1}"));
        assert!(!looks_like_json(""));
        assert!(!looks_like_json("<html>Bad Gateway</html>"));
    }

    #[test]
    fn test_body_preview() {
        assert_eq!(body_preview("  \n"), "<empty>");
        assert_eq!(body_preview("<h1>502</h1>"), "<h1>502</h1>");

        let long = "网".repeat(PREVIEW_CHARS + 5);
        let preview = body_preview(&long);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_unreachable_host_is_transport_error() {
        let config = HttpClientConfig {
            timeout_secs: 1,
            ..Default::default()
        };
        let client = UreqClient::new(&config);
        // 端口 1 一般无服务监听
        let req = RequestConfig::get("http://127.0.0.1:1/short_url/shorten.json").build();

        let err = client.send(&req).unwrap_err();
        assert!(matches!(err, ConvertError::Transport { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    /// 依赖外部网络服务，CI 环境可能失败
    #[test]
    #[ignore]
    fn test_ureq_basic_request() {
        let client = UreqClient::new(&HttpClientConfig::default());
        let req = RequestConfig::get("https://httpbin.org/json").build();

        let body = client.send(&req).unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json.is_object(), "Response should be JSON object");
    }
}
