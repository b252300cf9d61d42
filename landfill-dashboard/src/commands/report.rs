//! Evaluates every model and prints the results.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use landfill_core::{LandfillInputs, constraint::StrictlyPositive};
use landfill_models::Assessment;
use tracing::info;
use uom::si::{f64::Length, length::meter};

use crate::{
    config::InputArgs,
    report::{DEFAULT_SETTLEMENT_SCALE_M, Report},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Settlement that fills the progress bar (m)
    #[arg(long, default_value_t = DEFAULT_SETTLEMENT_SCALE_M)]
    pub settlement_scale: f64,
}

pub fn execute(args: &ReportArgs) -> Result<()> {
    let output = render(args)?;
    println!("{output}");
    Ok(())
}

fn render(args: &ReportArgs) -> Result<String> {
    let params = args.inputs.resolve()?;
    let inputs = LandfillInputs::new(params).context("invalid landfill inputs")?;
    let settlement_scale = StrictlyPositive::new(Length::new::<meter>(args.settlement_scale))
        .context("settlement scale must be greater than zero")?;

    let assessment = Assessment::evaluate(&inputs);
    if !assessment.is_complete() {
        info!("some analyses are undefined for these inputs");
    }

    let report = Report::new(&assessment, settlement_scale);
    match args.format {
        Format::Text => Ok(report.to_string()),
        Format::Json => Ok(serde_json::to_string_pretty(&report)?),
    }
}
