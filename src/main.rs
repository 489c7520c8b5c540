mod api;
mod config;
mod runner;

use anyhow::Result;
use env_logger::Env;
use log::debug;

use api::client::LeetCodeClient;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the lookup result.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let config = Config::load()?;
    let client = LeetCodeClient::new(config.endpoint)?;
    debug!("using endpoint {}", client.endpoint());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner::run(&client, &mut out).await
}
