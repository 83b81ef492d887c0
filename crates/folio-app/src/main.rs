mod cli;
mod console;
mod provider;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use folio_ai::{ChatSession, SessionOptions, SystemPromptSource};
use folio_common::{ConfigError, FolioError};
use folio_config::FolioConfig;
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines).
/// Variables already set in the environment win.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/folio-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "folio=info".parse().unwrap()),
            ),
        )
        .init();
}

fn main() -> ExitCode {
    // Before any threads exist, so set_var cannot race.
    load_dotenv();

    let args = cli::parse();

    let loaded = folio_config::load_config(args.config.as_deref().map(Path::new));
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "folio=info".to_string(),
    };
    init_logging(&directive);

    tracing::info!("folio v{} starting...", env!("CARGO_PKG_VERSION"));

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args, loaded)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("folio: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(
    args: cli::Args,
    loaded: Result<FolioConfig, ConfigError>,
) -> folio_common::Result<()> {
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => return Err(e.into()),
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            FolioConfig::default()
        }
    };
    if let Some(kind) = args.provider {
        config.provider.kind = kind;
    }

    if args.print_config {
        println!("{}", folio_config::config_to_json(&config));
        return Ok(());
    }

    let provider = provider::build_provider(&config.provider).map_err(provider::startup_error)?;
    tracing::info!(provider = provider.name(), "Provider ready");

    let name = config.assistant.name.clone();
    let options = SessionOptions {
        assistant_name: name.clone(),
        greeting: config.assistant.rendered_greeting(),
    };
    let session =
        Arc::new(ChatSession::new(provider, options).with_listener(console::reply_printer(name)));

    let source = SystemPromptSource::parse(&config.assistant.system_prompt);
    let prompt_loader = tokio::spawn({
        let session = session.clone();
        async move { session.load_system_prompt(&source).await }
    });

    if let Some(question) = args.ask {
        prompt_loader
            .await
            .map_err(|e| FolioError::Other(format!("system prompt task failed: {e}")))?;
        console::ask_once(&session, &question).await;
        return Ok(());
    }

    console::run_interactive(session, &config.assistant.quick_prompts).await?;
    tracing::info!("Shutdown complete");
    Ok(())
}
