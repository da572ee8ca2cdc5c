use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use cine_infrastructure::CinePaths;

mod bootstrap;
mod commands;
mod forms;
mod helper;
mod logging;
mod renderer;
mod repl;

use bootstrap::LaunchOptions;
use commands::Command;
use helper::CliHelper;
use renderer::TerminalRenderer;
use repl::{Flow, Repl};

#[derive(Parser)]
#[command(name = "cine")]
#[command(about = "Cine - browse, rate and comment on a movie catalog", long_about = None)]
struct Cli {
    /// Catalog API base URL (overrides the config file and CINE_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Configuration file to use instead of the default one
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Mirror logs to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point of the `cine` REPL.
///
/// Builds the client, restores the stored session, shows the catalog and
/// then reads commands until `quit` or end of input.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = CinePaths::default();
    let _log_guard = logging::init(&paths.logs_dir()?, cli.verbose)?;

    // ===== Client Initialization =====
    let options = LaunchOptions {
        api_url: cli.api_url,
        config: cli.config,
        ephemeral: cli.ephemeral,
    };
    let renderer = Arc::new(TerminalRenderer::stdout());
    let app = Arc::new(bootstrap::build(&options, &paths, renderer.clone())?);
    let repl = Repl::new(app.clone(), renderer.clone());

    // ===== REPL Setup =====
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Cine ===".bright_magenta().bold());
    println!(
        "{}",
        "Digite 'help' para ver os comandos ou 'quit' para sair.".bright_black()
    );

    app.start().await;

    // ===== Main REPL Loop =====
    loop {
        match rl.readline("cine> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match trimmed.parse::<Command>() {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e.to_string().yellow());
                        continue;
                    }
                };
                if repl.execute(command, &mut rl).await? == Flow::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detectado. Digite 'quit' para sair.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Até logo!".bright_green());
                break;
            }
            Err(err) => {
                tracing::error!("[Repl] Readline failed: {:?}", err);
                eprintln!("{}", format!("Erro: {:?}", err).red());
                break;
            }
        }
    }

    tracing::info!("[Repl] Exiting");
    Ok(())
}
