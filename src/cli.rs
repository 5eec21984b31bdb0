use clap::Parser;

use crate::client::{ApiClient, Transport};
use crate::config::Config;
use crate::error::Result;
use crate::format::{AnsiPainter, Formatter, PlainPainter};
use crate::parser::extract_content;
use crate::request::build_request;

/// Command-line surface: `shellbot <QUERY>...`.
#[derive(Debug, Parser)]
#[command(
    name = "shellbot",
    version,
    about = "Ask a virtual Bash and GNU utilities expert for help"
)]
pub struct Cli {
    /// Question for the assistant. Words are joined with single spaces.
    #[arg(value_name = "QUERY", required = true, num_args = 1.., trailing_var_arg = true)]
    pub query: Vec<String>,
}

impl Cli {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

/// Build, send, parse and format one query.
pub async fn run<T: Transport + ?Sized>(
    query: &str,
    config: &Config,
    transport: &T,
) -> Result<String> {
    let request = build_request(&config.model, &config.system_prompt, query);
    let body = ApiClient::from_config(transport, config)
        .complete(&request)
        .await?;
    let content = extract_content(&body)?;

    let rendered = if config.color {
        Formatter::new(AnsiPainter::new()).format(&content)
    } else {
        Formatter::new(PlainPainter).format(&content)
    };
    Ok(rendered)
}
