//! Password validator server - exposes `POST /api/v1/password/validate`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use validator::RuleValidator;
use validator_api::config::load_config;
use validator_api::{AppState, app, logging};

#[derive(Parser)]
#[command(name = "validator-api", version)]
#[command(about = "HTTP service that checks passwords against the composition policy")]
struct Args {
    /// TOML config file (defaults apply when missing)
    #[arg(long, default_value = "validator.toml")]
    config: PathBuf,

    /// Address to bind the server to (overrides the config file)
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    let special_chars: String = config.policy.special_chars.iter().collect();
    info!(
        config = %args.config.display(),
        min_length = config.policy.min_length,
        special_chars = %special_chars,
        "starting validator-api"
    );

    let state = AppState::from(RuleValidator::new(config.policy.clone()));
    let router = app(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(addr = %addr, "listening");

    axum::serve(listener, router).await?;

    Ok(())
}
