//! `tnsdesc redirect` command - Apply a server redirect to a descriptor.

use tnsdesc_core::{ConnectionModel, RedirectPayload};

use super::{load_descriptor, print_model};
use crate::cli::{OutputFormat, RedirectArgs};
use crate::config::Config;
use crate::error::CliResult;
use crate::output;

/// Run the redirect command
pub async fn run(args: RedirectArgs, config: &Config) -> CliResult<()> {
    let text = load_descriptor(&args.source, config).await?;
    let mut model = ConnectionModel::parse(&text)?;

    let payload = RedirectPayload::new(args.address, args.reconnect_data);
    model.apply_redirect(&payload)?;
    model.reset_cursor();

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&model)?),
        OutputFormat::Text => {
            output::header("Redirected Target");
            print_model(&model);
        }
    }

    Ok(())
}
