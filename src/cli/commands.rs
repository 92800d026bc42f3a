//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::ProbeSettings;
use crate::app::{AppContainer, OutputFormat, ProbeRequest};
use crate::cli::args::{ProbeCommandArgs, ShowArgs};
use crate::probe::ProbeArgs;

/// Execute the probe command
pub fn probe(container: &dyn AppContainer, args: ProbeCommandArgs, settings: &ProbeSettings) -> Result<()> {
    info!("Input: {}", args.input.display());

    let request = ProbeRequest {
        input: args.input.clone(),
        options: settings.to_options(),
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };

    let response = container
        .probe_interactor()
        .execute(request)
        .with_context(|| format!("Failed to probe {}", args.input.display()))?;

    print!("{}", response.summary);
    if args.json {
        println!();
    }

    info!("Probe command completed");
    Ok(())
}

/// Execute the args command
pub fn show_args(args: ShowArgs, settings: &ProbeSettings) -> Result<()> {
    let options = settings.to_options();
    let probe_args = ProbeArgs::build(&args.input, &options);
    println!("{} {}", options.ffprobe_path.display(), probe_args.command_line());
    Ok(())
}
