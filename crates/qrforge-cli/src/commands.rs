use super::args::{Cli, Commands, HistoryCommand, LogLevel, TypesCommand};
use super::handlers::{self, HandlerContext};
use anyhow::Result;
use qrforge_runtime::{Workspace, resolve_data_dir};
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = HandlerContext::new(cli.format);

    let open = || Workspace::open(&data_dir);

    match cli.command {
        Commands::Generate(args) => handlers::generate::handle(&ctx, &open()?, args),

        Commands::History { command } => {
            let workspace = open()?;
            match command {
                HistoryCommand::List => handlers::history::list(&ctx, &workspace),
                HistoryCommand::Show { id } => handlers::history::show(&ctx, &workspace, &id),
                HistoryCommand::Replay { id } => {
                    handlers::history::replay(&ctx, &workspace, &id)
                }
                HistoryCommand::Clear => handlers::history::clear(&ctx, &workspace),
            }
        }

        Commands::Types { command } => {
            let workspace = open()?;
            match command {
                TypesCommand::List => handlers::types::list(&ctx, &workspace),
                TypesCommand::Show { content_type } => {
                    handlers::types::show(&ctx, &workspace, content_type)
                }
                TypesCommand::Hide { content_type } => {
                    handlers::types::hide(&ctx, &workspace, content_type)
                }
                TypesCommand::Reset => handlers::types::reset(&ctx, &workspace),
            }
        }

        // Needs no stored state.
        Commands::Normalize { text } => handlers::normalize::handle(&ctx, &text),
    }
}

/// Logs go to stderr so stdout stays parseable. RUST_LOG wins over `--log-level`.
fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
