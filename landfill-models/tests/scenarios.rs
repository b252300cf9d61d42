use approx::assert_relative_eq;
use landfill_core::{
    DomainError, InputParameters, LandfillInputs, Model,
    units::{in_m3_per_day, m_per_day, mm_per_day, unit_weight_from_kn_per_m3},
};
use landfill_models::{
    Assessment, Classification, GeometryModel, StabilityModel, evaluate_geometry,
    evaluate_leachate, evaluate_settlement, evaluate_stability,
};
use uom::si::{
    angle::degree,
    area::square_meter,
    f64::{Angle, Area, Length, Pressure},
    length::meter,
    pressure::kilopascal,
    ratio::ratio,
};

fn m(value: f64) -> Length {
    Length::new::<meter>(value)
}

fn deg(value: f64) -> Angle {
    Angle::new::<degree>(value)
}

fn kpa(value: f64) -> Pressure {
    Pressure::new::<kilopascal>(value)
}

#[test]
fn settlement_of_a_twenty_meter_cell() {
    let result = evaluate_settlement(m(20.0), unit_weight_from_kn_per_m3(12.0));

    assert_relative_eq!(result.applied_stress.get::<kilopascal>(), 240.0, max_relative = 1e-12);
    assert_relative_eq!(result.settlement.get::<meter>(), 4.8, max_relative = 1e-12);
}

#[test]
fn leachate_from_ten_millimeters_of_rain() {
    let result = evaluate_leachate(
        mm_per_day(10.0),
        Area::new::<square_meter>(10_000.0),
        m_per_day(0.001),
    );
    let series: Vec<f64> = result.flow_series().map(in_m3_per_day).collect();

    assert_relative_eq!(in_m3_per_day(result.generation_volume), 100.0, max_relative = 1e-12);
    assert_relative_eq!(in_m3_per_day(result.steady_flow), 0.1, max_relative = 1e-12);
    assert_eq!(series.len(), 30);
    assert_eq!(series[0], in_m3_per_day(result.steady_flow));
    assert_relative_eq!(series[10], 0.0607, epsilon = 1e-4);
    assert!(series.windows(2).all(|pair| pair[1] <= pair[0]));
}

#[test]
fn stability_of_a_thirty_degree_slope() {
    let result = evaluate_stability(
        m(20.0),
        unit_weight_from_kn_per_m3(12.0),
        kpa(5.0),
        deg(30.0),
        deg(30.0),
    )
    .unwrap();

    assert_relative_eq!(result.factor_of_safety.get::<ratio>(), 1.196, epsilon = 1e-3);
    assert_eq!(result.classification, Classification::Marginal);
}

#[test]
fn stability_on_flat_ground_is_undefined() {
    let err = evaluate_stability(
        m(20.0),
        unit_weight_from_kn_per_m3(12.0),
        kpa(5.0),
        deg(30.0),
        deg(0.0),
    )
    .unwrap_err();

    assert!(matches!(err, DomainError::ZeroDrivingStress { .. }));
}

#[test]
fn geometry_rejects_degenerate_slopes() {
    for slope in [0.0, 90.0] {
        assert!(matches!(
            evaluate_geometry(m(20.0), deg(slope)),
            Err(DomainError::SlopeAngle { .. })
        ));
    }
}

#[test]
fn every_model_is_bit_identical_across_calls() {
    let inputs = LandfillInputs::new(InputParameters {
        waste_depth: 37.5,
        slope_angle: 22.0,
        rainfall: 63.0,
        permeability: 0.27,
        ..InputParameters::default()
    })
    .unwrap();

    let first = Assessment::evaluate(&inputs);
    let second = Assessment::evaluate(&inputs);

    let geometry = (first.geometry.unwrap(), second.geometry.unwrap());
    assert_eq!(
        geometry.0.base_length.value.to_bits(),
        geometry.1.base_length.value.to_bits()
    );

    let stability = (first.stability.unwrap(), second.stability.unwrap());
    assert_eq!(
        stability.0.value().to_bits(),
        stability.1.value().to_bits()
    );

    assert_eq!(
        first.settlement.settlement.value.to_bits(),
        second.settlement.settlement.value.to_bits()
    );

    let flows = first.leachate.flow_series().zip(second.leachate.flow_series());
    for (a, b) in flows {
        assert_eq!(a.value.to_bits(), b.value.to_bits());
    }
}

#[test]
fn stability_holds_across_the_input_domain() {
    for depth in [5.0, 20.0, 60.0] {
        for slope in [10.0, 30.0, 60.0] {
            let inputs = LandfillInputs::new(InputParameters {
                waste_depth: depth,
                slope_angle: slope,
                ..InputParameters::default()
            })
            .unwrap();

            let fos = StabilityModel.call(&inputs).unwrap().value();
            assert!(fos.is_finite() && fos > 0.0);

            let geometry = GeometryModel.call(&inputs).unwrap();
            assert!(geometry.base_length.get::<meter>() > 0.0);
        }
    }
}

#[test]
fn liner_thickness_does_not_affect_any_model() {
    let thin = LandfillInputs::new(InputParameters {
        liner_thickness: 0.1,
        ..InputParameters::default()
    })
    .unwrap();
    let thick = LandfillInputs::new(InputParameters {
        liner_thickness: 2.0,
        ..InputParameters::default()
    })
    .unwrap();

    let thin = Assessment::evaluate(&thin);
    let thick = Assessment::evaluate(&thick);

    assert_eq!(thin.geometry, thick.geometry);
    assert_eq!(thin.settlement, thick.settlement);
    assert_eq!(thin.leachate, thick.leachate);
    assert_eq!(thin.stability, thick.stability);
}
