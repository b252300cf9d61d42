//! The three standard landfill views.
//!
//! Colors for the stability classes live here; the models only report a
//! [`Classification`].

use eframe::egui::Color32;
use landfill_core::units::in_m3_per_day;
use landfill_models::{
    Classification, GeometryResult, LeachateResult, StabilityResult,
    stability::MIN_SAFE_FACTOR_OF_SAFETY,
};

use crate::PlotApp;

const WASTE_OUTLINE: Color32 = Color32::from_rgb(165, 42, 42);
// Sandy brown at 70% opacity.
const WASTE_FILL: Color32 = Color32::from_rgba_premultiplied(171, 115, 67, 179);
const FLOW_LINE: Color32 = Color32::from_rgb(0, 0, 255);

/// Bar color for a stability class: red, orange, or green.
#[must_use]
pub fn classification_color(classification: Classification) -> Color32 {
    match classification {
        Classification::Unsafe => Color32::from_rgb(255, 0, 0),
        Classification::Marginal => Color32::from_rgb(255, 165, 0),
        Classification::Safe => Color32::from_rgb(0, 128, 0),
    }
}

/// Upper end of the stability chart's y-axis, `max(2, FOS + 0.5)`.
#[must_use]
pub fn stability_y_max(factor_of_safety: f64) -> f64 {
    (factor_of_safety + 0.5).max(2.0)
}

/// Filled triangle of the simplified cross-section.
#[must_use]
pub fn cross_section(geometry: &GeometryResult) -> PlotApp {
    PlotApp::new()
        .add_filled("Waste", &geometry.outline(), WASTE_OUTLINE, WASTE_FILL)
        .x_label("Base Width (m)")
        .y_label("Height (m)")
}

/// Daily leachate flow over the decay series.
#[must_use]
pub fn leachate_flow(leachate: &LeachateResult) -> PlotApp {
    let points: Vec<[f64; 2]> = leachate
        .flow_series()
        .enumerate()
        .map(|(day, flow)| {
            #[allow(clippy::cast_precision_loss)]
            let day = day as f64;
            [day, in_m3_per_day(flow)]
        })
        .collect();

    PlotApp::new()
        .add_series("Leachate Flow", &points, Some(FLOW_LINE))
        .x_label("Days")
        .y_label("Flow (m³/day)")
}

/// Factor of safety bar against the minimum safe line.
#[must_use]
pub fn stability(result: &StabilityResult) -> PlotApp {
    let fos = result.value();

    PlotApp::new()
        .add_bar("FOS", 0.0, fos, classification_color(result.classification))
        .add_threshold("Min Safe FOS", MIN_SAFE_FACTOR_OF_SAFETY, Color32::BLACK)
        .y_label("Factor of Safety")
        .include_y(stability_y_max(fos))
}

#[cfg(test)]
mod tests {
    use super::*;

    use landfill_core::{InputParameters, LandfillInputs};
    use landfill_models::Assessment;

    fn assessment() -> Assessment {
        let inputs = LandfillInputs::new(InputParameters::default()).unwrap();
        Assessment::evaluate(&inputs)
    }

    #[test]
    fn y_axis_leaves_headroom() {
        assert_eq!(stability_y_max(1.2), 2.0);
        assert_eq!(stability_y_max(3.0), 3.5);
    }

    #[test]
    fn each_class_has_its_own_color() {
        let colors = [
            classification_color(Classification::Unsafe),
            classification_color(Classification::Marginal),
            classification_color(Classification::Safe),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn charts_are_built_from_results() {
        let assessment = assessment();

        assert_eq!(cross_section(&assessment.geometry.unwrap()).item_count(), 1);
        assert_eq!(leachate_flow(&assessment.leachate).item_count(), 1);
        assert_eq!(stability(&assessment.stability.unwrap()).item_count(), 2);
    }
}
