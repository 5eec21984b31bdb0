#![forbid(unsafe_code)]
#![doc = r#"
Shellbot

Ask a chat-completion API for Bash and GNU utilities help and print a colorized answer.

One invocation is one request: build the payload, POST it, parse the first choice, color it.

Modules
- `models`: Chat Completions request/response types.
- `request`: Payload builder (persona + query).
- `client`: Credential check and the HTTP transport seam.
- `parser`: Response body to answer text.
- `format`: Fence substitution and per-line coloring.
- `config`: Environment-derived settings.
- `cli`: Argument parsing and the end-to-end `run` function.
- `util`: Shared helpers (tracing, dotenv, HTTP client).
"#]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod parser;
pub mod request;
pub mod util;

pub use crate::cli::{run, Cli};
pub use crate::client::{ApiClient, HttpTransport, Transport};
pub use crate::config::Config;
pub use crate::error::ShellbotError;
pub use crate::format::{format_response, AnsiPainter, ColorTag, Formatter, Painter, PlainPainter};
pub use crate::parser::{extract_content, NO_RESPONSE};
pub use crate::request::build_request;
