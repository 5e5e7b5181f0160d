//! `tnsdesc walk` command - Show the order endpoints would be tried in.

use tnsdesc_core::ConnectionModel;

use super::load_descriptor;
use crate::cli::WalkArgs;
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output;

/// Run the walk command
pub async fn run(args: WalkArgs, config: &Config) -> CliResult<()> {
    if args.rounds == 0 {
        return Err(CliError::Input("--rounds must be at least 1".to_string()));
    }

    let text = load_descriptor(&args.source, config).await?;
    let mut model = ConnectionModel::parse(&text)?;
    let total = model.endpoints().len();

    output::header("Failover Order");

    for round in 1..=args.rounds {
        model.reset_cursor();
        output::section(&format!("Round {}", round));

        let mut attempts = 0;
        let mut advance = false;
        while let Some(endpoint) = model.active_endpoint(advance) {
            attempts += 1;
            output::step(attempts, total, &format!("try {}", endpoint));
            advance = true;
        }

        output::dim(&format!("  exhausted after {} endpoints", attempts));
        if round < args.rounds {
            output::newline();
        }
    }

    Ok(())
}
