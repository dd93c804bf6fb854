use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use goodkarma_core::Config;

/// GoodKarma triage questionnaire API
#[derive(Debug, Parser)]
#[command(name = "goodkarma", version)]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "GOODKARMA_BIND")]
    bind: Option<SocketAddr>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "GOODKARMA_LOG")]
    log_filter: Option<String>,

    /// Value sent in Access-Control-Allow-Origin
    #[arg(long, env = "GOODKARMA_CORS_ORIGIN")]
    cors_allow_origin: Option<String>,

    /// Reject answers for any question other than the expected next one
    #[arg(long, env = "GOODKARMA_STRICT_QUESTION_ORDER")]
    strict_question_order: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let defaults = Config::default();

        Config {
            bind_address: self.bind.unwrap_or(defaults.bind_address),
            log_filter: self.log_filter.unwrap_or(defaults.log_filter),
            cors_allow_origin: self.cors_allow_origin.unwrap_or(defaults.cors_allow_origin),
            strict_question_order: self.strict_question_order,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config();

    goodkarma_core::init_logging(&config.log_filter);

    goodkarma_server::run(config)
        .await
        .context("GoodKarma server failed")
}
