//! Runtime configuration for the `ciphercraft` server and CLI.
//!
//! Values come from the environment, optionally overridden by a TOML file
//! named in `CIPHERCRAFT_CONFIG`. Command-line flags take precedence over
//! both and are applied by the binary.

use std::fs;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::format::FormatOptions;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub show_steps: bool,
    pub group_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerConfigOverride {
    bind_addr: Option<String>,
    show_steps: Option<bool>,
    group_size: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            show_steps: false,
            group_size: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the environment, then applies `CIPHERCRAFT_CONFIG` if set.
    pub fn from_env_or_file() -> Result<Self> {
        Self::from_lookup_or_file(|name| std::env::var(name).ok())
    }

    fn from_lookup_or_file(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::from_lookup(&lookup)?;
        if let Some(path) = lookup("CIPHERCRAFT_CONFIG") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("read CIPHERCRAFT_CONFIG: {path}"))?;
            config.apply_toml(&contents)?;
        }
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = ServerConfig::default();
        if let Some(value) = lookup("CIPHERCRAFT_BIND") {
            config.bind_addr = value
                .parse()
                .with_context(|| "parse CIPHERCRAFT_BIND")?;
        }
        if let Some(value) = lookup("CIPHERCRAFT_SHOW_STEPS") {
            config.show_steps = parse_bool(&value)
                .with_context(|| "parse CIPHERCRAFT_SHOW_STEPS")?;
        }
        if let Some(value) = lookup("CIPHERCRAFT_GROUP_SIZE") {
            let size: usize = value
                .parse()
                .with_context(|| "parse CIPHERCRAFT_GROUP_SIZE")?;
            config.group_size = (size > 0).then_some(size);
        }
        Ok(config)
    }

    /// Overrides fields present in a TOML document.
    pub fn apply_toml(&mut self, contents: &str) -> Result<()> {
        let overrides: ServerConfigOverride =
            toml::from_str(contents).with_context(|| "parse ciphercraft config toml")?;
        if let Some(value) = overrides.bind_addr {
            self.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
        }
        if let Some(value) = overrides.show_steps {
            self.show_steps = value;
        }
        if let Some(value) = overrides.group_size {
            self.group_size = (value > 0).then_some(value);
        }
        Ok(())
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            show_steps: self.show_steps,
            group_size: self.group_size,
        }
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}
