//! tnsdesc CLI - Command-line inspector for connect descriptors.

use clap::Parser;

use tnsdesc_cli::cli::{Cli, Command};
use tnsdesc_cli::commands;
use tnsdesc_cli::config::Config;
use tnsdesc_cli::error::CliResult;
use tnsdesc_cli::output;
use tnsdesc_core::{logging, patterns};

#[tokio::main]
async fn main() {
    // Run the CLI and handle errors
    if let Err(e) = run().await {
        output::newline();
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;
    init_logging(cli.verbose, &config);

    patterns::validate()?;

    match cli.command {
        Command::Parse(args) => commands::parse::run(args, &config).await,
        Command::Walk(args) => commands::walk::run(args, &config).await,
        Command::Redirect(args) => commands::redirect::run(args, &config).await,
        Command::Privilege(args) => commands::privilege::run(args).await,
        Command::Version => commands::version::run().await,
    }
}

fn init_logging(verbose: bool, config: &Config) {
    if verbose {
        logging::init_with("debug", config.logging.resolved_format());
    } else if let Some(level) = &config.logging.level {
        logging::init_with(level, config.logging.resolved_format());
    } else {
        logging::init();
    }
}
