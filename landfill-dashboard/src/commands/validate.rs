//! Checks inputs against their allowed ranges.

use anyhow::{Result, bail};
use clap::Args;
use landfill_core::{Field, InputParameters, RangeError};
use tracing::{info, warn};

use crate::config::InputArgs;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
}

pub fn execute(args: &ValidateArgs) -> Result<()> {
    let params = args.inputs.resolve()?;
    let errors = range_errors(&params);

    if errors.is_empty() {
        info!("all {} inputs are within range", Field::ALL.len());
        println!("inputs are valid");
        return Ok(());
    }

    for err in &errors {
        warn!("{err}");
        println!("{err}");
    }
    bail!("{} input(s) out of range", errors.len())
}

/// Checks every field, not just the first failing one.
fn range_errors(params: &InputParameters) -> Vec<RangeError> {
    Field::ALL
        .into_iter()
        .filter_map(|field| field.check(params.get(field)).err())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_errors() {
        assert!(range_errors(&InputParameters::default()).is_empty());
    }

    #[test]
    fn reports_every_failing_field() {
        let params = InputParameters {
            waste_depth: 100.0,
            rainfall: -1.0,
            friction_angle: f64::NAN,
            ..InputParameters::default()
        };

        let fields: Vec<Field> = range_errors(&params).iter().map(RangeError::field).collect();

        assert_eq!(
            fields,
            vec![Field::WasteDepth, Field::Rainfall, Field::FrictionAngle]
        );
    }

    #[test]
    fn execute_fails_on_bad_input() {
        let args = ValidateArgs {
            inputs: InputArgs {
                area: Some(10.0),
                ..InputArgs::default()
            },
        };
        assert!(execute(&args).is_err());
    }
}
