//! Shorten / expand commands

use colored::Colorize;

use crate::converter::{Direction, MultiUrlConverter, UrlMapping};
use crate::interfaces::cli::CliError;
use crate::utils::validate_urls;

/// 缩短网址并输出结果
pub fn shorten_urls<C: MultiUrlConverter>(
    converter: &C,
    urls: Vec<String>,
    json: bool,
    validate: bool,
) -> Result<(), CliError> {
    if validate {
        validate_urls(&urls)?;
    }
    let mapping = converter.shorten_many(&urls)?;
    print_result(Direction::Shorten, &urls, &mapping, json)
}

/// 还原网址并输出结果
pub fn expand_urls<C: MultiUrlConverter>(
    converter: &C,
    urls: Vec<String>,
    json: bool,
) -> Result<(), CliError> {
    let mapping = converter.lengthen_many(&urls)?;
    print_result(Direction::Lengthen, &urls, &mapping, json)
}

fn print_result(
    direction: Direction,
    inputs: &[String],
    mapping: &UrlMapping,
    json: bool,
) -> Result<(), CliError> {
    if json {
        println!("{}", render_json(mapping)?);
        return Ok(());
    }

    for (from, to) in mapping.iter() {
        println!("{} -> {}", from.cyan(), to.blue().underline());
    }

    let missing = missing_inputs(inputs, mapping);
    for url in &missing {
        eprintln!("{} no {} result for {}", "⚠".bold().yellow(), direction, url);
    }
    if !missing.is_empty() {
        eprintln!(
            "{} {} of {} url(s) converted",
            "ℹ".bold().blue(),
            mapping.len().to_string().green(),
            inputs.len()
        );
    }
    Ok(())
}

/// 映射转为 JSON 对象文本
pub fn render_json(mapping: &UrlMapping) -> Result<String, CliError> {
    serde_json::to_string_pretty(mapping)
        .map_err(|e| CliError::CommandError(format!("Failed to serialize result: {}", e)))
}

/// 服务商没有返回结果的输入（去重，保持输入顺序）
pub fn missing_inputs<'a>(inputs: &'a [String], mapping: &UrlMapping) -> Vec<&'a str> {
    let mut seen = std::collections::HashSet::new();
    inputs
        .iter()
        .map(String::as_str)
        .filter(|url| !mapping.contains_key(url) && seen.insert(*url))
        .collect()
}
