use anyhow::Context;
use clap::Parser;
use shellbot::util::{build_http_client, init_tracing};
use shellbot::{run, Cli, Config, HttpTransport};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env();
    tracing::debug!(model = %config.model, endpoint = %config.endpoint(), "configuration resolved");

    let transport = HttpTransport::new(build_http_client());
    let answer = run(&cli.query_text(), &config, &transport)
        .await
        .context("Error querying OpenAI")?;

    println!("{answer}");
    Ok(())
}
