//! End-to-end tests: Sina provider + ureq client against a mock HTTP server

use mockito::{Matcher, Server};
use shorturl::config::{HttpClientConfig, SinaConfig};
use shorturl::converter::{MultiUrlConverter, UrlConverter};
use shorturl::errors::ConvertError;
use shorturl::http::UreqClient;
use shorturl::providers::{SinaHttpUrlConverter, sina_converter};

const APP_KEY: &str = "testkey";

fn converter_for(server: &Server) -> SinaHttpUrlConverter {
    let config = SinaConfig {
        app_key: APP_KEY.to_string(),
        shorten_api: format!("{}/short_url/shorten.json", server.url()),
        expand_api: format!("{}/short_url/expand.json", server.url()),
        batch_limit: 20,
    };
    let http = HttpClientConfig {
        timeout_secs: 5,
        ..Default::default()
    };
    sina_converter(&config, UreqClient::shared(&http)).expect("valid config")
}

#[test]
fn test_shorten_via_http() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/short_url/shorten.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("source".into(), APP_KEY.into()),
            Matcher::UrlEncoded("url_long".into(), "https://baidu.com".into()),
        ]))
        .match_header("content-type", "application/json;charset=UTF-8")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"url_short":"http://t.cn/RxxY7e1","url_long":"https://baidu.com","type":0}]"#)
        .create();

    let conv = converter_for(&server);
    assert_eq!(conv.shorten("https://baidu.com").unwrap(), "http://t.cn/RxxY7e1");
    mock.assert();
}

#[test]
fn test_expand_via_http() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/short_url/expand.json")
        .match_query(Matcher::UrlEncoded(
            "url_short".into(),
            "http://t.cn/RxxY7e1".into(),
        ))
        .with_status(200)
        .with_body(r#"[{"url_short":"http://t.cn/RxxY7e1","url_long":"https://baidu.com","type":0}]"#)
        .create();

    let conv = converter_for(&server);
    let mapping = conv.lengthen_many(&["http://t.cn/RxxY7e1".to_string()]).unwrap();
    assert_eq!(mapping.get("http://t.cn/RxxY7e1"), Some("https://baidu.com"));
    mock.assert();
}

#[test]
fn test_error_envelope_with_error_status() {
    let body = r#"{"request":"/short_url/shorten.json","error_code":"10006","error":"source paramter(appkey) is missing"}"#;
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/short_url/shorten.json")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(body)
        .create();

    let conv = converter_for(&server);
    match conv.shorten("https://baidu.com") {
        Err(ConvertError::Provider(msg)) => assert_eq!(msg, body),
        other => panic!("expected provider error, got {:?}", other),
    }
}

/// 批内第一个 url_long 参数，编码或未编码的查询串都能匹配
fn first_param_pattern(index: usize) -> String {
    format!(r"source={}&url_long=https(%3A|:)(%2F|/)(%2F|/)example\.com(%2F|/){}&", APP_KEY, index)
}

/// 重复的 url_long 参数在 `UrlEncoded` 中只保留最后一个值，
/// 所以按每批最后一个网址区分两次请求，再用正则确认批内第一个网址
#[test]
fn test_two_batches_via_http() {
    let urls: Vec<String> = (0..25).map(|i| format!("https://example.com/{}", i)).collect();
    let mut server = Server::new();

    let first = server
        .mock("GET", "/short_url/shorten.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("url_long".into(), "https://example.com/19".into()),
            Matcher::Regex(first_param_pattern(0)),
        ]))
        .with_status(200)
        .with_body(r#"[{"url_short":"http://t.cn/a","url_long":"https://example.com/0","type":0}]"#)
        .expect(1)
        .create();
    let second = server
        .mock("GET", "/short_url/shorten.json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("url_long".into(), "https://example.com/24".into()),
            Matcher::Regex(first_param_pattern(20)),
        ]))
        .with_status(200)
        .with_body(r#"[{"url_short":"http://t.cn/b","url_long":"https://example.com/20","type":0}]"#)
        .expect(1)
        .create();

    let conv = converter_for(&server);
    let mapping = conv.shorten_many(&urls).unwrap();

    first.assert();
    second.assert();
    assert_eq!(
        mapping.iter().collect::<Vec<_>>(),
        vec![
            ("https://example.com/0", "http://t.cn/a"),
            ("https://example.com/20", "http://t.cn/b"),
        ]
    );
}

#[test]
fn test_gateway_error_page_reports_status() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/short_url/shorten.json")
        .match_query(Matcher::Any)
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html><body>Bad Gateway</body></html>")
        .create();

    let conv = converter_for(&server);
    match conv.shorten("https://baidu.com") {
        Err(ConvertError::Decode(msg)) => {
            assert!(msg.contains("502"), "got: {}", msg);
            assert!(msg.contains("Bad Gateway"), "got: {}", msg);
        }
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[test]
fn test_empty_server_error_reports_status() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/short_url/expand.json")
        .match_query(Matcher::Any)
        .with_status(500)
        .create();

    let conv = converter_for(&server);
    match conv.lengthen("http://t.cn/RxxY7e1") {
        Err(ConvertError::Decode(msg)) => {
            assert!(msg.contains("500"), "got: {}", msg);
            assert!(msg.contains("<empty>"), "got: {}", msg);
        }
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[test]
fn test_connection_refused_is_transport_error() {
    let config = SinaConfig {
        shorten_api: "http://127.0.0.1:1/short_url/shorten.json".to_string(),
        ..Default::default()
    };
    let http = HttpClientConfig {
        timeout_secs: 1,
        ..Default::default()
    };
    let conv = sina_converter(&config, UreqClient::shared(&http)).unwrap();

    match conv.shorten("https://baidu.com") {
        Err(ConvertError::Transport { message, cause }) => {
            assert!(message.starts_with("调用 API 缩短网址失败"), "got: {}", message);
            assert!(cause.is_some());
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}

/// 依赖新浪线上接口，CI 环境可能失败
#[test]
#[ignore]
fn test_real_sina_round_trip() {
    let config = shorturl::config::StaticConfig::default();
    let conv = sina_converter(&config.sina, UreqClient::shared(&config.http)).unwrap();

    let short = conv.shorten("https://baidu.com").unwrap();
    let long = conv.lengthen(&short).unwrap();
    assert!(long.contains("baidu.com"));
}
