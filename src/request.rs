use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use snafu::{ensure, OptionExt};

use crate::error::{InvalidNumberSnafu, LookupError, MissingFieldsSnafu};

const SEPARATOR: char = '/';

static LEADING_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\+?([0-9]+)").unwrap());

/// Request body as received. Fields are optional so that a missing field
/// surfaces as a validation error rather than a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupBody {
    pub card_name: Option<String>,
    pub number_string: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNumber {
    pub collector_number: u32,
    pub set_total: u32,
}

/// A validated lookup: a non-empty name and a number that parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub card_name: String,
    pub number_string: String,
    pub number: ParsedNumber,
}

impl LookupBody {
    pub fn validate(self) -> Result<LookupRequest, LookupError> {
        let card_name = self
            .card_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .context(MissingFieldsSnafu)?
            .to_string();

        let number_string = self.number_string.context(MissingFieldsSnafu)?;
        ensure!(has_single_separator(&number_string), MissingFieldsSnafu);

        let number = parse_number_string(&number_string).context(InvalidNumberSnafu {
            number_string: &number_string,
        })?;

        Ok(LookupRequest {
            card_name,
            number_string,
            number,
        })
    }
}

pub fn has_single_separator(number_string: &str) -> bool {
    number_string.matches(SEPARATOR).count() == 1
}

/// Reads the integer at the start of `part`, ignoring leading whitespace, an
/// optional `+` and anything after the ASCII digits. `None` if there are no
/// leading digits, the sign is `-`, or the value does not fit.
pub fn parse_leading_integer(part: &str) -> Option<u32> {
    LEADING_INTEGER
        .captures(part)
        .and_then(|cap| cap[1].parse().ok())
}

pub fn parse_number_string(number_string: &str) -> Option<ParsedNumber> {
    let (collector, total) = number_string.split_once(SEPARATOR)?;
    Some(ParsedNumber {
        collector_number: parse_leading_integer(collector)?,
        set_total: parse_leading_integer(total)?,
    })
}
