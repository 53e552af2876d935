//! Timeline Tic-Tac-Toe - terminal host.

use anyhow::Result;
use clap::Parser;
use timeline_tictactoe::view_schema;
use timeline_tui::{init_file_logging, init_stderr_logging, run, App, Cli, Command, TuiConfig};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TuiConfig::load(&cli.config)?;
    if let Some(games) = cli.games {
        config = config.with_initial_games(games);
    }
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(config.log_file())?;
            run(&config)
        }
        Command::DumpView { schema } => {
            init_stderr_logging();
            let json = if schema {
                serde_json::to_string_pretty(&view_schema())?
            } else {
                let app = App::new(&config);
                serde_json::to_string_pretty(&app.games().view())?
            };
            info!(schema, "Dumping view");
            println!("{}", json);
            Ok(())
        }
    }
}
