// The CLI is a thin consumer of qrforge-runtime: every encoding rule and
// state transition lives below it. Each invocation is one session:
// settings start fresh from config, history and visible types are loaded
// from the data directory and written back on change.

mod args;
mod commands;
mod handlers;

pub use args::{Cli, Commands, GenerateArgs, HistoryCommand, LogLevel, OutputFormat, TypesCommand};
pub use commands::run;
