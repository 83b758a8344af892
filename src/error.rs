use reqwest::StatusCode;
use snafu::Snafu;

/// Every way a single lookup can fail once the request has been accepted.
///
/// The `Display` text is what the caller receives, so each variant must
/// stay distinguishable by message alone.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LookupError {
    #[snafu(display("Request body is not valid JSON: {source}"))]
    InvalidBody { source: serde_json::Error },

    #[snafu(display("A valid card name and number (e.g., 130/203) are required."))]
    MissingFields,

    #[snafu(display("Invalid number format received: {number_string}"))]
    InvalidNumber { number_string: String },

    #[snafu(display("Failed to query the Pokémon TCG API."))]
    Upstream { source: UpstreamError },

    #[snafu(display("No cards found for {card_name} #{collector_number}."))]
    NoCards {
        card_name: String,
        collector_number: u32,
    },

    #[snafu(display(
        "Found cards for {card_name} #{collector_number}, but none matched the set total of {set_total}."
    ))]
    SetTotalMismatch {
        card_name: String,
        collector_number: u32,
        set_total: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Upstream,
    NotFound,
    Mismatch,
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBody { .. } | Self::MissingFields | Self::InvalidNumber { .. } => {
                ErrorKind::Validation
            }
            Self::Upstream { .. } => ErrorKind::Upstream,
            Self::NoCards { .. } => ErrorKind::NotFound,
            Self::SetTotalMismatch { .. } => ErrorKind::Mismatch,
        }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum UpstreamError {
    #[snafu(display("request failed: {source}"))]
    Transport { source: reqwest::Error },

    #[snafu(display("HTTP {status}"))]
    Status { status: StatusCode },

    #[snafu(display("response could not be decoded: {source}"))]
    Decode { source: reqwest::Error },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display("Failed to parse {name} \"{value}\" as a URL"))]
    InvalidUrl {
        name: &'static str,
        value: String,
        source: url::ParseError,
    },

    #[snafu(display("{name} must be an http(s) URL, got \"{value}\""))]
    UnsupportedScheme { name: &'static str, value: String },

    #[snafu(display("{name} is not a valid header value"))]
    InvalidApiKey {
        name: &'static str,
        source: reqwest::header::InvalidHeaderValue,
    },

    #[snafu(display("Failed to build the HTTP client"))]
    HttpClient { source: reqwest::Error },
}
