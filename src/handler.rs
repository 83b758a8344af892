use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::http::{Method, StatusCode};
use lambda_http::{tracing, Body, Error, Request, Response};
use serde::Serialize;
use snafu::{ErrorCompat, ResultExt};

use crate::error::{InvalidBodySnafu, LookupError};
use crate::lookup::{self, LookupResult};
use crate::pokemontcg::api::CardDatabase;
use crate::request::LookupBody;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Handles one invocation. Only response-building failures escape as `Err`;
/// lookup failures become a 500 with an `error` message.
pub async fn process_event<D>(db: &D, event: Request) -> Result<Response<Body>, Error>
where
    D: CardDatabase + ?Sized,
{
    tracing::info!(method = %event.method(), "received card lookup request");

    if event.method() != Method::POST {
        return Ok(Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header(CONTENT_TYPE, "text/plain")
            .body(Body::from("Method Not Allowed"))?);
    }

    match handle_lookup(db, event.body()).await {
        Ok(result) => json_response(StatusCode::OK, &result),
        Err(err) => {
            let chain: Vec<String> = err.iter_chain().map(|e| e.to_string()).collect();
            tracing::error!(kind = ?err.kind(), "Function Error: {}", chain.join(": "));
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorBody {
                    error: err.to_string(),
                },
            )
        }
    }
}

async fn handle_lookup<D>(db: &D, body: &Body) -> Result<LookupResult, LookupError>
where
    D: CardDatabase + ?Sized,
{
    let request = decode_body(body)?.validate()?;
    lookup::lookup_card(db, &request).await
}

pub fn decode_body(body: &Body) -> Result<LookupBody, LookupError> {
    let bytes: &[u8] = body;
    if bytes.is_empty() {
        return Ok(LookupBody::default());
    }
    serde_json::from_slice(bytes).context(InvalidBodySnafu)
}

fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(payload)?;
    Ok(Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))?)
}
