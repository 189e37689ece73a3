//! Info command implementation

use blogscore_core::config::{Config, ConfigSources};
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    tokenizer: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    power_words: Option<String>,
    keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            tokenizer: config.tokenizer.as_str(),
            power_words: config.power_words.as_ref().map(ToString::to_string),
            keywords: config.keywords.clone(),
            min_score: config.min_score,
            max_input_bytes: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    let pkg = &info.package;
    println!("{} {}", pkg.name.bold(), pkg.version.green());
    if !pkg.description.is_empty() {
        println!("{}", pkg.description);
    }
    if !pkg.license.is_empty() {
        println!("{}: {}", "License".dimmed(), pkg.license);
    }
    if !pkg.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), pkg.repository.cyan());
    }

    let cfg = &info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match cfg.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    print_opt("Log directory", cfg.log_dir.as_ref());
    println!("{}: {}", "Tokenizer".dimmed(), cfg.tokenizer);
    print_opt("Power words", cfg.power_words.as_ref());
    if cfg.keywords.is_empty() {
        print_opt::<String>("Keywords", None);
    } else {
        println!("{}: {}", "Keywords".dimmed(), cfg.keywords.join(", "));
    }

    println!();
    println!("{}", "Quality Gates".bold().underline());
    print_opt("Min score", cfg.min_score.as_ref());
    match cfg.max_input_bytes {
        Some(max) => println!("{}: {max} bytes", "Input limit".dimmed()),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: Option<&T>) {
    match value {
        Some(v) => println!("{}: {v}", label.dimmed()),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogscore_core::{DEFAULT_MAX_INPUT_BYTES, TokenizerBackend};

    #[test]
    fn text_and_json_succeed() {
        let config = Config::default();
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), false, &config, &sources).is_ok());
        assert!(cmd_info(InfoArgs::default(), true, &config, &sources).is_ok());
    }

    #[test]
    fn config_info_reflects_defaults() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.tokenizer, "basic");
        assert_eq!(info.max_input_bytes, Some(DEFAULT_MAX_INPUT_BYTES));
    }

    #[test]
    fn config_info_reflects_overrides() {
        let config = Config {
            tokenizer: TokenizerBackend::Rich,
            keywords: vec!["rust".into()],
            disable_input_limit: true,
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert_eq!(info.tokenizer, "rich");
        assert_eq!(info.keywords, vec!["rust"]);
        assert!(info.max_input_bytes.is_none());
    }
}
