use std::io;

use card_lookup::handler;
use card_lookup::platform::{ApiConfig, Platform};
use card_lookup::PokemonTcgClient;
use lambda_http::http::{Method, StatusCode};
use lambda_http::{run, service_fn, tracing, Body, Error, Request};
use once_cell::sync::OnceCell;

static CLIENT: OnceCell<PokemonTcgClient> = OnceCell::new();

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let platform = Platform::detect();
    let config = ApiConfig::from_env()?;
    let client = CLIENT.get_or_try_init(|| PokemonTcgClient::new(&config))?;
    tracing::info!(?platform, base_url = %config.base_url, "card lookup starting");

    match platform {
        Platform::Lambda => {
            run(service_fn(|event: Request| handler::process_event(client, event))).await
        }
        Platform::Local => run_local(client).await,
    }
}

/// Feeds one request body from stdin through the handler as a POST.
async fn run_local(client: &PokemonTcgClient) -> Result<(), Error> {
    let body = io::read_to_string(io::stdin())?;
    let mut event = Request::new(Body::from(body));
    *event.method_mut() = Method::POST;

    let response = handler::process_event(client, event).await?;
    eprintln!("HTTP {}", response.status());
    println!("{}", String::from_utf8_lossy(response.body()));

    local_exit_status(response.status())
}

/// Non-2xx answers make the local run fail, so scripts see a non-zero exit.
fn local_exit_status(status: StatusCode) -> Result<(), Error> {
    if !status.is_success() {
        return Err(format!("HTTP {}", status).into());
    }
    Ok(())
}
