//! Input loading: TOML file first, then command-line overrides.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use landfill_core::{Field, InputParameters};

/// Where the landfill inputs come from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// TOML file with input parameters (missing keys use defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Waste depth (m)
    #[arg(long)]
    pub waste_depth: Option<f64>,

    /// Liner thickness (m)
    #[arg(long)]
    pub liner_thickness: Option<f64>,

    /// Slope angle (degrees)
    #[arg(long)]
    pub slope_angle: Option<f64>,

    /// Waste permeability (m/day)
    #[arg(long)]
    pub permeability: Option<f64>,

    /// Average daily rainfall (mm/day)
    #[arg(long)]
    pub rainfall: Option<f64>,

    /// Landfill area (m²)
    #[arg(long)]
    pub area: Option<f64>,

    /// Waste unit weight (kN/m³)
    #[arg(long)]
    pub unit_weight: Option<f64>,

    /// Waste cohesion (kPa)
    #[arg(long)]
    pub cohesion: Option<f64>,

    /// Friction angle (degrees)
    #[arg(long)]
    pub friction_angle: Option<f64>,
}

impl InputArgs {
    /// Loads the config file, if any, and applies the flag overrides.
    pub fn resolve(&self) -> Result<InputParameters> {
        let mut params = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                parse_parameters(&text)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => InputParameters::default(),
        };

        for (field, value) in self.overrides() {
            if let Some(value) = value {
                tracing::debug!(%field, value, "overriding input");
                *params.get_mut(field) = value;
            }
        }

        Ok(params)
    }

    fn overrides(&self) -> [(Field, Option<f64>); 9] {
        [
            (Field::WasteDepth, self.waste_depth),
            (Field::LinerThickness, self.liner_thickness),
            (Field::SlopeAngle, self.slope_angle),
            (Field::Permeability, self.permeability),
            (Field::Rainfall, self.rainfall),
            (Field::Area, self.area),
            (Field::UnitWeight, self.unit_weight),
            (Field::Cohesion, self.cohesion),
            (Field::FrictionAngle, self.friction_angle),
        ]
    }
}

/// Parses input parameters from TOML text.
pub fn parse_parameters(text: &str) -> Result<InputParameters> {
    Ok(toml::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let params = parse_parameters("waste_depth = 30.0\nrainfall = 25.0\n").unwrap();

        assert_eq!(params.waste_depth, 30.0);
        assert_eq!(params.rainfall, 25.0);
        assert_eq!(params.area, InputParameters::default().area);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_parameters("waste_height = 30.0\n").is_err());
    }

    #[test]
    fn example_config_parses() {
        let params = parse_parameters(include_str!("../config/example.toml")).unwrap();
        assert_eq!(params.waste_depth, 45.0);
        assert_eq!(params.friction_angle, 28.0);
    }

    #[test]
    fn flags_override_the_file() {
        let path = std::env::temp_dir().join(format!("landfill-config-{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "waste_depth = 30.0\ncohesion = 12.0").unwrap();

        let args = InputArgs {
            config: Some(path.clone()),
            cohesion: Some(20.0),
            ..InputArgs::default()
        };
        let params = args.resolve().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(params.waste_depth, 30.0);
        assert_eq!(params.cohesion, 20.0);
    }

    #[test]
    fn missing_file_names_the_path() {
        let args = InputArgs {
            config: Some(PathBuf::from("/nonexistent/landfill.toml")),
            ..InputArgs::default()
        };

        let err = args.resolve().unwrap_err();

        assert!(err.to_string().contains("/nonexistent/landfill.toml"));
    }
}
