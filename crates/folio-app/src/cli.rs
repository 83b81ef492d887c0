use clap::Parser;

use folio_config::schema::ProviderKind;

/// folio — a portfolio chat assistant for the terminal.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. debug, folio_ai=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Completion provider override (groq or gemini).
    #[arg(long)]
    pub provider: Option<ProviderKind>,

    /// Ask one question, print the reply, and exit.
    #[arg(long)]
    pub ask: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
