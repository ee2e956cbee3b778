//! End-to-end checks of the pathway calculators against hand-computed values
//! and physical bounds.

use hp_core::{Tolerances, nearly_equal};
use hp_pathways::{
    OperatingPoint, Parameter, PathwayError, SweepDefinition, SweepType, execute_sweep,
    hte_boosted_production_rate, hte_production_rate, lte_production_rate,
    si_boosted_production_rate, si_production_rate,
};
use hp_props::{efficiency, specific_energy_at};
use proptest::prelude::*;

fn tight() -> Tolerances {
    Tolerances {
        abs: 1e-9,
        rel: 1e-12,
    }
}

#[test]
fn si_table_breakpoint_is_exact() {
    assert_eq!(specific_energy_at(800.0), 400.0 * 1000.0 / 3600.0);
}

#[test]
fn efficiency_at_100c() {
    let expected = 0.68 * (1.0 - 300.0 / 373.0);
    assert!(nearly_equal(efficiency(100.0), expected, tight()));
    assert!((efficiency(100.0) - 0.1827).abs() < 1e-4);
}

#[test]
fn lte_reference_point() {
    let p = lte_production_rate(60.0, 0.5).unwrap();
    assert_eq!(p.specific_energy_kwh_per_kg, 120.0);
    assert_eq!(p.production_rate_kg_per_h, 500.0);
}

#[test]
fn lte_zero_efficiency_is_an_error() {
    assert!(matches!(
        lte_production_rate(60.0, 0.0),
        Err(PathwayError::InvalidOperatingPoint { .. })
    ));
}

#[test]
fn si_domain_boundary() {
    assert!(matches!(
        si_production_rate(600.0, 700.0),
        Err(PathwayError::DomainPreconditionViolation { .. })
    ));

    let p = si_production_rate(600.0, 800.0).unwrap();
    let pth = specific_energy_at(776.0);
    assert!(nearly_equal(p.specific_energy_kwh_per_kg, pth, tight()));
    assert!(nearly_equal(
        p.production_rate_kg_per_h,
        600.0 / pth * 1000.0,
        tight()
    ));
}

#[test]
fn si_boosted_domain_boundary() {
    assert!(matches!(
        si_boosted_production_rate(600.0, 850.0, 740.0),
        Err(PathwayError::DomainPreconditionViolation { .. })
    ));
}

#[test]
fn hte_zero_power_for_any_inputs() {
    for p in [0.5, 1.0, 10.0, 100.0] {
        for t in [25.0, 500.0, 850.0, 1200.0] {
            let out = hte_production_rate(0.0, p, t).unwrap();
            assert_eq!(out.production_rate_kg_per_h, 0.0);
            assert_eq!(out.specific_energy_kwh_per_kg, 0.0);

            let boosted = hte_boosted_production_rate(0.0, p, t, t).unwrap();
            assert!(boosted.is_idle());
        }
    }
}

#[test]
fn batch_sweep_reports_instead_of_aborting() {
    let base = OperatingPoint::SiBoosted {
        thermal_power_mw: 600.0,
        outlet_temp_c: 770.0,
        process_temp_c: 800.0,
    };
    let sweep = SweepDefinition::from_text(
        Parameter::ProcessTemperature,
        "700C",
        "950C",
        6,
        SweepType::Linear,
    )
    .unwrap();

    let result = execute_sweep(&base, &sweep).unwrap();
    assert_eq!(result.outcomes.len(), 6);
    // 700 °C lies below the SI table; 750 °C is the first valid point.
    assert_eq!(result.num_failed, 1);
    assert_eq!(result.successful_independent_values()[0], 750.0);
}

proptest! {
    #[test]
    fn gamma_in_unit_interval_for_hte(
        pressure in 1.0f64..50.0,
        outlet in 600.0f64..1000.0,
    ) {
        let gamma = hte_production_rate(600.0, pressure, outlet).unwrap().gamma.unwrap();
        prop_assert!((0.0..=1.0).contains(&gamma));
    }

    #[test]
    fn gamma_in_unit_interval_for_hte_boosted(
        pressure in 1.0f64..50.0,
        outlet in 600.0f64..1000.0,
        lift in 0.0f64..1.0,
    ) {
        let reactor = 0.97 * outlet;
        let electrolysis = reactor + lift * (1000.0 - reactor);
        let out = hte_boosted_production_rate(600.0, pressure, outlet, electrolysis).unwrap();
        let gamma = out.gamma.unwrap();
        prop_assert!((0.0..=1.0).contains(&gamma));
        prop_assert!(out.specific_energy_kwh_per_kg > 0.0);
    }

    #[test]
    fn gamma_in_unit_interval_for_si_boosted(
        outlet in 800.0f64..1000.0,
        lift in 0.0f64..1.0,
    ) {
        let reactor = 0.97 * outlet;
        let process = reactor.max(750.0) + lift * (1000.0 - reactor.max(750.0));
        let out = si_boosted_production_rate(600.0, outlet, process).unwrap();
        let gamma = out.gamma.unwrap();
        prop_assert!((0.0..=1.0).contains(&gamma));
    }

    #[test]
    fn rate_scales_linearly_with_power(power in 1.0f64..5000.0, outlet in 780.0f64..1000.0) {
        let one = si_production_rate(1.0, outlet).unwrap();
        let many = si_production_rate(power, outlet).unwrap();
        prop_assert!((many.production_rate_kg_per_h - power * one.production_rate_kg_per_h).abs()
            <= 1e-9 * many.production_rate_kg_per_h);
    }
}
