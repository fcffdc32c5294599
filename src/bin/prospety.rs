//! Command-line driver for the Prospety API.
//!
//! Prints the JSON of the requested resource to stdout. Settings come from
//! `config/default.*`, `config/{APP_ENV}.*` and `PROSPETY_*` variables.

use std::env;
use std::io::{self, Write};
use std::path::Path;

use dotenvy::dotenv;
use serde::Serialize;
use thiserror::Error;

use prospety::client::Client;
use prospety::domain::types::{ChannelKind, SearchId};
use prospety::dto::api::ExportFormat;
use prospety::models::config::ClientConfig;
use prospety::services::ServiceError;
use prospety::transport::Transport;

const USAGE: &str = "usage: prospety <channels | quick-searches | searches | search <id> | \
                     prospects <id> | export <id> [type] | start <id> | pause <id> | \
                     finish <id> | quick-search <video|social> <url>>";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Channels,
    QuickSearches,
    CreateQuickSearch(ChannelKind, String),
    Searches,
    Search(i64),
    Prospects(i64),
    Export(i64, ExportFormat),
    Start(i64),
    Pause(i64),
    Finish(i64),
}

fn parse_id(raw: Option<&String>) -> Result<i64, CliError> {
    let raw = raw.ok_or_else(|| CliError::Usage("missing search id".to_string()))?;
    raw.parse()
        .map_err(|_| CliError::Usage(format!("invalid search id: {raw}")))
}

fn parse_command(args: &[String]) -> Result<Command, CliError> {
    let Some(name) = args.first() else {
        return Err(CliError::Usage("missing command".to_string()));
    };
    let command = match name.as_str() {
        "channels" => Command::Channels,
        "quick-searches" => Command::QuickSearches,
        "quick-search" => {
            let channel = match args.get(1).map(String::as_str) {
                Some("video") => ChannelKind::VideoPlatform,
                Some("social") => ChannelKind::SocialPlatform,
                other => {
                    return Err(CliError::Usage(format!("invalid channel: {other:?}")));
                }
            };
            let url = args
                .get(2)
                .ok_or_else(|| CliError::Usage("missing url".to_string()))?;
            Command::CreateQuickSearch(channel, url.clone())
        }
        "searches" => Command::Searches,
        "search" => Command::Search(parse_id(args.get(1))?),
        "prospects" => Command::Prospects(parse_id(args.get(1))?),
        "export" => {
            let id = parse_id(args.get(1))?;
            let format = args
                .get(2)
                .map(|raw| ExportFormat::from(raw.as_str()))
                .unwrap_or_default();
            Command::Export(id, format)
        }
        "start" => Command::Start(parse_id(args.get(1))?),
        "pause" => Command::Pause(parse_id(args.get(1))?),
        "finish" => Command::Finish(parse_id(args.get(1))?),
        other => return Err(CliError::Usage(format!("unknown command: {other}"))),
    };
    Ok(command)
}

fn render<S: Serialize + ?Sized>(value: &S) -> Result<Vec<u8>, CliError> {
    let mut output = serde_json::to_vec_pretty(value)?;
    output.push(b'\n');
    Ok(output)
}

fn message(text: String) -> Result<Vec<u8>, CliError> {
    Ok(format!("{text}\n").into_bytes())
}

fn search_id(raw: i64) -> Result<SearchId, CliError> {
    SearchId::new(raw).map_err(|err| CliError::Service(ServiceError::from(err)))
}

/// Runs one command, returning the bytes to write to stdout. Exports are
/// passed through unchanged.
fn run<T: Transport>(client: &Client<T>, command: Command) -> Result<Vec<u8>, CliError> {
    match command {
        Command::Channels => render(&client.list_channels()?),
        Command::QuickSearches => render(&client.list_quick_searches()?),
        Command::CreateQuickSearch(channel, url) => {
            client.create_quick_search(channel, &url)?;
            message(format!("quick search for {url} submitted"))
        }
        Command::Searches => render(&client.list_searches()?),
        Command::Search(id) => render(&client.get_search(search_id(id)?)?),
        Command::Prospects(id) => {
            let batch = client.get_prospect_batch(search_id(id)?)?;
            if !batch.rejected.is_empty() {
                log::warn!("{} prospects could not be decoded", batch.rejected.len());
            }
            render(&batch.prospects)
        }
        Command::Export(id, format) => Ok(client.export_prospects(search_id(id)?, &format)?),
        Command::Start(id) => {
            client.start_search(search_id(id)?)?;
            message(format!("search {id} started"))
        }
        Command::Pause(id) => {
            client.pause_search(search_id(id)?)?;
            message(format!("search {id} paused"))
        }
        Command::Finish(id) => {
            client.finish_search(search_id(id)?)?;
            message(format!("search {id} finished"))
        }
    }
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match ClientConfig::load(Path::new("config"), &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let client = match Client::from_config(&config) {
        Ok(client) => client,
        Err(err) => {
            log::error!("Error building client: {err}");
            std::process::exit(1);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let output = parse_command(&args).and_then(|command| run(&client, command));

    let output = output.and_then(|bytes| {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
        Ok(())
    });

    if let Err(err) = output {
        log::error!("{err}");
        if matches!(err, CliError::Usage(_)) {
            eprintln!("{USAGE}");
        }
        std::process::exit(1);
    }
}
