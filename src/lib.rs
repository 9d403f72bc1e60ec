//! shorturl - a client for Sina Weibo's short-URL API
//!
//! Shortens and expands URLs one at a time or in bulk. Bulk requests are
//! split into batches of at most 20 URLs (the provider's parameter limit),
//! sent one after another over a pooled HTTP client, and merged into a
//! single ordered mapping.
//!
//! # Example
//! ```no_run
//! use shorturl::config::StaticConfig;
//! use shorturl::converter::UrlConverter;
//! use shorturl::http::UreqClient;
//! use shorturl::providers::sina_converter;
//!
//! let config = StaticConfig::default();
//! let converter = sina_converter(&config.sina, UreqClient::shared(&config.http))?;
//! let short = converter.shorten("https://baidu.com")?;
//! println!("{}", short);
//! # Ok::<(), shorturl::errors::ConvertError>(())
//! ```
//!
//! # Architecture
//! - `converter`: conversion traits, batching and the generic HTTP converter
//! - `providers`: provider implementations (Sina)
//! - `http`: request configuration and the pooled HTTP client
//! - `config`: configuration loading (TOML + environment)
//! - `system`: logging initialization
//! - `interfaces`: CLI command handlers

pub mod cli;
pub mod config;
pub mod converter;
pub mod errors;
pub mod http;
pub mod interfaces;
pub mod providers;
pub mod system;
pub mod utils;
