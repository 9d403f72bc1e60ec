use std::sync::Arc;

use tracing::{debug, warn};

use super::batch::split_batches;
use super::{Direction, MultiUrlConverter, UrlConverter, UrlMapping, UrlShortenerProvider};
use crate::errors::{ConvertError, Result};
use crate::http::{HttpClient, RequestConfig};

/// 通用的 HTTP 网址转换器
///
/// 负责参数校验、按服务商上限分批、逐批顺序请求以及合并结果；
/// 与具体服务商相关的部分全部委托给 `P`。
pub struct HttpUrlConverter<P> {
    provider: P,
    client: Arc<dyn HttpClient>,
}

impl<P: UrlShortenerProvider> HttpUrlConverter<P> {
    pub fn new(provider: P, client: Arc<dyn HttpClient>) -> Self {
        Self { provider, client }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// 替换 HTTP 客户端
    pub fn with_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.client = client;
        self
    }

    /// 生成一次请求的配置
    pub fn request_config(&self, direction: Direction, urls: &[String]) -> Result<RequestConfig> {
        let url = self.provider.endpoint(direction, urls)?;
        Ok(RequestConfig::builder(self.provider.method(direction), url)
            .headers(self.provider.headers(direction))
            .body(self.provider.request_body(direction, urls))
            .build())
    }

    /// 发送一次请求并返回原始响应体，不分批也不解码
    pub fn send_raw(&self, direction: Direction, urls: &[String]) -> Result<String> {
        let request = self.request_config(direction, urls)?;
        self.client
            .send(&request)
            .map_err(|e| e.relabel_transport(format!("调用 API {}失败", direction.label())))
    }

    /// 转换任意数量的网址
    ///
    /// 任何一批失败都会中止整个操作
    pub fn convert(&self, direction: Direction, urls: &[String]) -> Result<UrlMapping> {
        check(urls)?;

        let batches = split_batches(urls, self.provider.batch_limit());
        debug!(
            "{}: {} {} url(s) in {} batch(es)",
            self.provider.name(),
            direction,
            urls.len(),
            batches.len()
        );

        let mut result = UrlMapping::with_capacity(urls.len());
        for (i, batch) in batches.into_iter().enumerate() {
            let body = self.send_raw(direction, batch)?;
            let part = self.provider.decode(direction, &body).inspect_err(|e| {
                warn!(
                    "{}: {} batch {} failed: {}",
                    self.provider.name(),
                    direction,
                    i + 1,
                    e
                )
            })?;
            debug!("{}: batch {} returned {} entries", self.provider.name(), i + 1, part.len());
            result.merge(part);
        }

        Ok(result)
    }

    fn convert_one(&self, direction: Direction, url: &str) -> Result<String> {
        self.convert(direction, &[url.to_string()])?
            .take(url)
            .ok_or_else(|| ConvertError::missing_result(url))
    }
}

impl<P: UrlShortenerProvider> UrlConverter for HttpUrlConverter<P> {
    fn shorten(&self, long_url: &str) -> Result<String> {
        self.convert_one(Direction::Shorten, long_url)
    }

    fn lengthen(&self, short_url: &str) -> Result<String> {
        self.convert_one(Direction::Lengthen, short_url)
    }
}

impl<P: UrlShortenerProvider> MultiUrlConverter for HttpUrlConverter<P> {
    fn shorten_many(&self, long_urls: &[String]) -> Result<UrlMapping> {
        self.convert(Direction::Shorten, long_urls)
    }

    fn lengthen_many(&self, short_urls: &[String]) -> Result<UrlMapping> {
        self.convert(Direction::Lengthen, short_urls)
    }
}

/// 判断参数是否合法
fn check(urls: &[String]) -> Result<()> {
    if urls.is_empty() {
        return Err(ConvertError::validation("参数不能为空"));
    }
    Ok(())
}
