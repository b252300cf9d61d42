//! Opens a chart window for one analysis.

use anyhow::{Context, Result, anyhow};
use clap::{Args, ValueEnum};
use landfill_core::LandfillInputs;
use landfill_models::Assessment;
use landfill_plot::{PlotApp, charts};
use tracing::info;

use crate::config::InputArgs;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum View {
    #[default]
    CrossSection,
    Leachate,
    Stability,
}

impl View {
    fn title(self) -> &'static str {
        match self {
            View::CrossSection => "Simplified Landfill Cross-Section",
            View::Leachate => "Leachate Flow Over Time",
            View::Stability => "Slope Stability Factor of Safety",
        }
    }
}

#[derive(Args, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Which chart to show
    #[arg(short, long, value_enum, default_value_t = View::CrossSection)]
    pub view: View,
}

pub fn execute(args: &PlotArgs) -> Result<()> {
    let inputs = LandfillInputs::new(args.inputs.resolve()?).context("invalid landfill inputs")?;
    let app = build(args.view, &Assessment::evaluate(&inputs))?;

    info!(view = ?args.view, "opening chart window");
    app.run(args.view.title())
        .map_err(|err| anyhow!("failed to open chart window: {err}"))
}

fn build(view: View, assessment: &Assessment) -> Result<PlotApp> {
    let app = match view {
        View::CrossSection => {
            let geometry = assessment
                .geometry
                .as_ref()
                .map_err(|err| anyhow!("cross-section is undefined: {err}"))?;
            charts::cross_section(geometry)
        }
        View::Leachate => charts::leachate_flow(&assessment.leachate),
        View::Stability => {
            let stability = assessment
                .stability
                .as_ref()
                .map_err(|err| anyhow!("factor of safety is undefined: {err}"))?;
            charts::stability(stability)
        }
    };

    Ok(app)
}
