//! 직경-비용 스윕 회귀 테스트.
use pump_system_toolbox::pumping::{diameter_cost_sweep, DiameterSweepInput, SWEEP_SAMPLES};

fn base_input() -> DiameterSweepInput {
    DiameterSweepInput {
        base_diameter_mm: 100.0,
        geometric_head_m: 15.0,
        flow_m3_per_h: 50.0,
        length_m: 100.0,
        roughness_mm: 0.15,
        fittings_k_sum: 5.0,
        density_kg_per_m3: 998.2,
        kinematic_viscosity_m2_per_s: 1.004e-6,
        pump_efficiency: 0.70,
        motor_efficiency: 0.90,
        hours_per_day: 8.0,
        tariff_per_kwh: 0.75,
    }
}

#[test]
fn sweep_returns_exactly_twenty_ascending_points() {
    let points = diameter_cost_sweep(base_input());
    assert_eq!(points.len(), SWEEP_SAMPLES);
    // 기준 100mm → [50, 200] 구간
    assert!((points[0].diameter_mm - 50.0).abs() < 1e-9);
    assert!((points[SWEEP_SAMPLES - 1].diameter_mm - 200.0).abs() < 1e-9);
    for pair in points.windows(2) {
        assert!(pair[1].diameter_mm > pair[0].diameter_mm);
    }
}

#[test]
fn lower_bound_is_clamped_to_25_mm() {
    let mut input = base_input();
    input.base_diameter_mm = 30.0;
    let points = diameter_cost_sweep(input);
    assert!((points[0].diameter_mm - 25.0).abs() < 1e-9);
    assert!((points[SWEEP_SAMPLES - 1].diameter_mm - 60.0).abs() < 1e-9);
}

#[test]
fn annual_cost_decreases_with_diameter() {
    let points = diameter_cost_sweep(base_input());
    for point in &points {
        assert!(point.annual_cost.is_finite() && point.annual_cost > 0.0);
    }
    for pair in points.windows(2) {
        assert!(
            pair[1].annual_cost <= pair[0].annual_cost + 1e-9,
            "cost rose: {} -> {} at D={}",
            pair[0].annual_cost,
            pair[1].annual_cost,
            pair[1].diameter_mm
        );
    }
}

#[test]
fn geometric_head_sets_the_cost_floor() {
    // 손실이 0에 수렴해도 기하학적 양정 몫의 비용은 남는다.
    let mut input = base_input();
    input.base_diameter_mm = 400.0;
    let points = diameter_cost_sweep(input.clone());

    let flow_m3_s = input.flow_m3_per_h / 3600.0;
    let floor_w = flow_m3_s * input.density_kg_per_m3 * 9.81 * input.geometric_head_m
        / input.pump_efficiency
        / input.motor_efficiency;
    let floor_annual =
        floor_w / 1000.0 * input.hours_per_day * 365.0 * input.tariff_per_kwh;

    let last = points[SWEEP_SAMPLES - 1];
    assert!(last.annual_cost > floor_annual);
    assert!(last.annual_cost < floor_annual * 1.05, "cost={} floor={}", last.annual_cost, floor_annual);
}
