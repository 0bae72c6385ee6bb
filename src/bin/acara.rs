use std::io;
use std::process::ExitCode;

use acara::{Config, ConsoleRenderer, ListCommand};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "acara")]
#[command(about = "Event wiring inspection CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered events and their listeners
    List {
        /// Only show events whose name contains this substring
        #[arg(short, long)]
        event: Option<String>,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::List { event, no_color } => {
            let command = ListCommand::from_config(&config)
                .with_renderer(ConsoleRenderer::new().with_colors(!no_color));

            let mut stdout = io::stdout().lock();
            match command.run(event.as_deref(), &mut stdout) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
