//! 동력 체인과 비용 환산 회귀 테스트.
use pump_system_toolbox::pumping::{energy_cost, EnergyCostInput};

fn base_input() -> EnergyCostInput {
    EnergyCostInput {
        flow_m3_per_h: 50.0,
        total_head_m: 30.0,
        pump_efficiency: 0.70,
        motor_efficiency: 0.90,
        hours_per_day: 8.0,
        tariff_per_kwh: 0.75,
        density_kg_per_m3: 998.2,
    }
}

#[test]
fn reference_case_power_chain() {
    let res = energy_cost(base_input());
    // 수력 4080 W → 축 5829 W → 전기 6476 W
    assert!(
        (res.electrical_power_kw - 6.4764).abs() < 1e-3,
        "kW={}",
        res.electrical_power_kw
    );
    assert!(res.annual_cost.is_finite() && res.annual_cost > 0.0);
}

#[test]
fn zero_efficiency_yields_zero_power_not_a_fault() {
    for (pump_eff, motor_eff) in [(0.0, 0.90), (0.70, 0.0), (0.0, 0.0), (-0.5, 0.90)] {
        let mut input = base_input();
        input.pump_efficiency = pump_eff;
        input.motor_efficiency = motor_eff;
        let res = energy_cost(input);
        assert_eq!(res.electrical_power_kw, 0.0);
        assert_eq!(res.monthly_consumption_kwh, 0.0);
        assert_eq!(res.monthly_cost, 0.0);
        assert_eq!(res.annual_cost, 0.0);
    }
}

#[test]
fn monthly_and_annual_use_different_day_bases() {
    let input = base_input();
    let res = energy_cost(input.clone());
    let daily_kwh = res.electrical_power_kw * input.hours_per_day;

    // 월간은 30일 기준
    assert!((res.monthly_consumption_kwh - daily_kwh * 30.0).abs() < 1e-9);
    assert!((res.monthly_cost - daily_kwh * 30.0 * input.tariff_per_kwh).abs() < 1e-9);
    // 연간은 365일 기준. 월간 × 12와 일치하지 않는다.
    assert!((res.annual_cost - daily_kwh * 365.0 * input.tariff_per_kwh).abs() < 1e-9);
    assert!((res.annual_cost - res.monthly_cost * 12.0).abs() > 1.0);
}

#[test]
fn power_scales_linearly_with_head() {
    let mut input = base_input();
    let res1 = energy_cost(input.clone());
    input.total_head_m = 60.0;
    let res2 = energy_cost(input);
    assert!(
        (res2.electrical_power_kw - res1.electrical_power_kw * 2.0).abs() < 1e-9,
        "kW1={} kW2={}",
        res1.electrical_power_kw,
        res2.electrical_power_kw
    );
}
