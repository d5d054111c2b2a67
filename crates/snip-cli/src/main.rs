mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use snip_persistence::DEFAULT_LIST_FILE;
use snip_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("SNIP_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        // Stderr only, so TUI drawing is never interleaved with log lines.
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        None => {
            let mut app = App::new(cli.file);
            app.run().await?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "snip", &mut std::io::stdout());
        }
        Some(cmd) => {
            let file_path = cli.file.unwrap_or_else(|| DEFAULT_LIST_FILE.to_string());
            let mut ctx = CliContext::load(&file_path).await?;
            handlers::item::handle(&mut ctx, cmd).await?;
        }
    }

    Ok(())
}
