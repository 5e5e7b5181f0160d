//! `tnsdesc parse` command - Parse a descriptor and print the model.

use tnsdesc_core::ConnectionModel;

use super::{load_descriptor, print_model};
use crate::cli::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::error::CliResult;
use crate::output;

/// Run the parse command
pub async fn run(args: ParseArgs, config: &Config) -> CliResult<()> {
    let text = load_descriptor(&args.source, config).await?;
    let model = ConnectionModel::parse(&text)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&model)?),
        OutputFormat::Text => {
            output::header("Connect Descriptor");
            print_model(&model);
        }
    }

    Ok(())
}
