use crate::error::{ConfigError, InvalidUrlSnafu, UnsupportedSchemeSnafu};
use snafu::{ensure, ResultExt};
use std::env;
use url::Url;

pub const API_URL_VAR: &str = "POKEMONTCG_API_URL";
pub const API_KEY_VAR: &str = "POKEMONTCG_API_KEY";
pub const DEFAULT_API_URL: &str = "https://api.pokemontcg.io/v2/";

const LAMBDA_RUNTIME_VAR: &str = "AWS_LAMBDA_RUNTIME_API";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Local,
    Lambda,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Always ends in '/', so endpoint paths can be joined onto it.
    pub base_url: Url,
    pub api_key: Option<String>,
}

impl Platform {
    pub fn detect() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(LAMBDA_RUNTIME_VAR) {
            Some(_) => Self::Lambda,
            None => Self::Local,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup(API_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        Ok(ApiConfig {
            base_url: parse_base_url(&raw_url)?,
            api_key,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };

    let url = Url::parse(&with_slash).context(InvalidUrlSnafu {
        name: API_URL_VAR,
        value: raw,
    })?;

    ensure!(
        matches!(url.scheme(), "http" | "https"),
        UnsupportedSchemeSnafu {
            name: API_URL_VAR,
            value: raw,
        }
    );

    Ok(url)
}
