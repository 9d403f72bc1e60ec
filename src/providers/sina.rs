//! 新浪微博短网址 API
//!
//! 接口文档: http://open.weibo.com/wiki/Short_url/shorten
//!
//! 注：新浪 API 每次请求参数数量限制为 20 个。

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{trace, warn};
use url::Url;

use crate::config::SinaConfig;
use crate::converter::{Direction, HttpUrlConverter, UrlMapping, UrlShortenerProvider};
use crate::errors::{ConvertError, Result};
use crate::http::HttpClient;

/// 最大允许的参数数量（包含该值）
pub const SINA_BATCH_LIMIT: usize = 20;

const SHORTEN_PARAM_NAME: &str = "url_long";
const LENGTHEN_PARAM_NAME: &str = "url_short";
const APP_KEY_PARAM_NAME: &str = "source";

/// 使用新浪 API 的转换器
pub type SinaHttpUrlConverter = HttpUrlConverter<SinaProvider>;

/// 新浪的缩短网址结果
///
/// 仅当失败时 `error_code` 不为空
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinaShortUrl {
    /// 错误码，接口可能返回字符串或数字
    #[serde(default, deserialize_with = "string_or_number")]
    pub error_code: Option<String>,

    /// 错误提示
    #[serde(default)]
    pub error: Option<String>,

    /// 链接的类型，见 [`LinkKind`]
    #[serde(rename = "type", default)]
    pub link_type: i32,

    #[serde(default)]
    pub url_short: Option<String>,

    #[serde(default)]
    pub url_long: Option<String>,
}

impl SinaShortUrl {
    pub fn link_kind(&self) -> LinkKind {
        LinkKind::from(self.link_type)
    }

    /// 按转换方向取出 (key, value)
    fn into_entry(self, direction: Direction) -> Option<(String, String)> {
        match direction {
            Direction::Shorten => Some((self.url_long?, self.url_short?)),
            Direction::Lengthen => Some((self.url_short?, self.url_long?)),
        }
    }
}

/// 链接内容类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    WebPage,
    Video,
    Music,
    Activity,
    Vote,
    Other(i32),
}

impl From<i32> for LinkKind {
    fn from(value: i32) -> Self {
        match value {
            0 => LinkKind::WebPage,
            1 => LinkKind::Video,
            2 => LinkKind::Music,
            3 => LinkKind::Activity,
            5 => LinkKind::Vote,
            other => LinkKind::Other(other),
        }
    }
}

/// 整体失败时返回的错误对象
///
/// 例如 `{"request":"/short_url/shorten.json","error_code":"10006","error":"source paramter(appkey) is missing"}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SinaErrorBody {
    #[serde(default)]
    pub request: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub error_code: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// 新浪短网址服务商
///
/// 接口地址在 `new` 中校验，之后以规范化后的字符串保存
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinaProvider {
    app_key: String,
    shorten_api: String,
    expand_api: String,
    batch_limit: usize,
}

impl SinaProvider {
    /// 根据配置创建，接口地址必须是合法的 URL
    pub fn new(config: &SinaConfig) -> Result<Self> {
        let parse = |name: &str, api: &str| {
            Url::parse(api)
                .map(String::from)
                .map_err(|e| ConvertError::config(format!("invalid {} '{}': {}", name, api, e)))
        };

        Ok(Self {
            app_key: config.app_key.clone(),
            shorten_api: parse("sina.shorten_api", &config.shorten_api)?,
            expand_api: parse("sina.expand_api", &config.expand_api)?,
            batch_limit: config.batch_limit.clamp(1, SINA_BATCH_LIMIT),
        })
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// 为 API 添加请求参数
    ///
    /// 结果形如 `<api>?source=<key>&url_long=<a>&url_long=<b>`，参数值做百分号编码
    fn append_api_params(&self, api: &str, param_name: &str, urls: &[String]) -> String {
        let mut uri = api.to_string();
        uri.push(if api.contains('?') { '&' } else { '?' });
        uri.push_str(APP_KEY_PARAM_NAME);
        uri.push('=');
        uri.push_str(&urlencoding::encode(&self.app_key));

        for url in urls {
            uri.push('&');
            uri.push_str(param_name);
            uri.push('=');
            uri.push_str(&urlencoding::encode(url));
        }
        uri
    }
}

/// 使用内置的新浪接口地址，这些地址已是规范形式，无需再解析
impl Default for SinaProvider {
    fn default() -> Self {
        let config = SinaConfig::default();
        Self {
            app_key: config.app_key,
            shorten_api: config.shorten_api,
            expand_api: config.expand_api,
            batch_limit: SINA_BATCH_LIMIT,
        }
    }
}

impl UrlShortenerProvider for SinaProvider {
    fn name(&self) -> &'static str {
        "Sina"
    }

    fn batch_limit(&self) -> usize {
        self.batch_limit
    }

    fn endpoint(&self, direction: Direction, urls: &[String]) -> Result<String> {
        Ok(match direction {
            Direction::Shorten => self.append_api_params(&self.shorten_api, SHORTEN_PARAM_NAME, urls),
            Direction::Lengthen => {
                self.append_api_params(&self.expand_api, LENGTHEN_PARAM_NAME, urls)
            }
        })
    }

    fn decode(&self, direction: Direction, body: &str) -> Result<UrlMapping> {
        let body_trimmed = body.trim_start();
        if is_error(body_trimmed) {
            if let Ok(err) = serde_json::from_str::<SinaErrorBody>(body_trimmed) {
                warn!(
                    "Sina API {} failed: error_code={:?}, error={:?}, request={:?}",
                    direction, err.error_code, err.error, err.request
                );
            }
            return Err(ConvertError::provider(body));
        }

        let records: Vec<SinaShortUrl> = serde_json::from_str(body_trimmed)?;
        let mut mapping = UrlMapping::with_capacity(records.len());
        for record in records {
            if let Some(code) = record.error_code.as_deref() {
                warn!(
                    "Sina API skipped a record: error_code={}, error={:?}",
                    code, record.error
                );
                continue;
            }
            trace!("Sina record: type={:?}", record.link_kind());
            match record.into_entry(direction) {
                Some((key, value)) => {
                    mapping.insert(key, value);
                }
                None => warn!("Sina API returned a record without url_short/url_long"),
            }
        }
        Ok(mapping)
    }
}

/// 判断请求服务是否失败：失败时返回对象，成功时返回数组
///
/// 只看第一个字符，若接口把成功结果包在对象里会被误判为失败
fn is_error(body: &str) -> bool {
    body.starts_with('{')
}

/// 用配置创建新浪转换器
pub fn sina_converter(
    config: &SinaConfig,
    client: std::sync::Arc<dyn HttpClient>,
) -> Result<SinaHttpUrlConverter> {
    Ok(HttpUrlConverter::new(SinaProvider::new(config)?, client))
}
