use async_trait::async_trait;
use lambda_http::tracing;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Request};
use snafu::{ensure, ResultExt};
use std::fmt;
use url::Url;

use crate::error::{
    ConfigError, DecodeSnafu, HttpClientSnafu, InvalidApiKeySnafu, InvalidUrlSnafu, StatusSnafu,
    TransportSnafu, UpstreamError,
};
use crate::platform::{ApiConfig, API_KEY_VAR, API_URL_VAR};
use crate::pokemontcg::models::{Card, SearchResult};

const USER_AGENT: &str = concat!("card-lookup/", env!("CARGO_PKG_VERSION"));

/// A card search filtered by exact name and collector number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardQuery {
    pub name: String,
    pub number: u32,
}

impl CardQuery {
    pub fn new(name: &str, number: u32) -> Self {
        CardQuery {
            name: name.to_string(),
            number,
        }
    }
}

/// Renders the `q` parameter, e.g. `name:"Pikachu" number:58`.
impl fmt::Display for CardQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "name:\"")?;
        for c in self.name.chars() {
            if c == '"' || c == '\\' {
                write!(f, "\\")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "\" number:{}", self.number)
    }
}

/// Source of card records. The handler only ever issues one search per call.
#[async_trait]
pub trait CardDatabase: Send + Sync {
    async fn search_cards(&self, query: &CardQuery) -> Result<Vec<Card>, UpstreamError>;
}

pub struct PokemonTcgClient {
    http: Client,
    cards_url: Url,
}

impl PokemonTcgClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        Self::from_builder(Client::builder(), config)
    }

    /// Finishes `builder` with the API's headers. Lets callers adjust
    /// transport settings such as proxies.
    pub fn from_builder(builder: ClientBuilder, config: &ApiConfig) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).context(InvalidApiKeySnafu { name: API_KEY_VAR })?;
            headers.insert("X-Api-Key", value);
        }

        let http = builder
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .context(HttpClientSnafu)?;

        let cards_url = config.base_url.join("cards").context(InvalidUrlSnafu {
            name: API_URL_VAR,
            value: config.base_url.as_str(),
        })?;

        Ok(PokemonTcgClient { http, cards_url })
    }

    /// Builds, but does not send, the search request for `query`.
    pub fn search_request(&self, query: &CardQuery) -> reqwest::Result<Request> {
        self.http
            .get(self.cards_url.clone())
            .header("accept", "application/json")
            .query(&[("q", query.to_string())])
            .build()
    }
}

#[async_trait]
impl CardDatabase for PokemonTcgClient {
    async fn search_cards(&self, query: &CardQuery) -> Result<Vec<Card>, UpstreamError> {
        let request = self.search_request(query).context(TransportSnafu)?;
        tracing::info!(url = %request.url(), "querying Pokémon TCG API");

        let res = self.http.execute(request).await.context(TransportSnafu)?;
        let status = res.status();
        ensure!(status.is_success(), StatusSnafu { status });

        let result: SearchResult = res.json().await.context(DecodeSnafu)?;
        tracing::info!(
            page = result.page,
            page_size = result.page_size,
            count = result.count,
            total_count = result.total_count,
            "received search results"
        );
        Ok(result.into_cards())
    }
}
