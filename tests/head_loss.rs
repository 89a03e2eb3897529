//! Darcy-Weisbach 손실수두 회귀 테스트.
use pump_system_toolbox::pumping::{head_loss, HeadLossInput, TURBULENT_REYNOLDS_LIMIT};

fn base_input() -> HeadLossInput {
    HeadLossInput {
        flow_m3_per_h: 50.0,
        diameter_mm: 100.0,
        length_m: 100.0,
        roughness_mm: 0.15,
        fittings_k_sum: 5.0,
        kinematic_viscosity_m2_per_s: 1.004e-6,
    }
}

#[test]
fn reference_water_case_is_turbulent() {
    let res = head_loss(base_input());
    assert!(
        (res.velocity_m_per_s - 1.7684).abs() < 1e-3,
        "v={}",
        res.velocity_m_per_s
    );
    assert!(res.reynolds_number > TURBULENT_REYNOLDS_LIMIT);
    assert!(res.major_loss_m.is_finite() && res.major_loss_m > 0.0);
    assert!(res.minor_loss_m.is_finite() && res.minor_loss_m > 0.0);
    // 주손실 ≈ 3.68 m, 국부손실 = 5·v²/(2g) ≈ 0.797 m
    assert!(
        res.major_loss_m > 3.5 && res.major_loss_m < 3.9,
        "major={}",
        res.major_loss_m
    );
    assert!(
        (res.minor_loss_m - 0.7969).abs() < 1e-3,
        "minor={}",
        res.minor_loss_m
    );
}

#[test]
fn zero_or_negative_diameter_returns_infinite_sentinels() {
    for diameter_mm in [0.0, -10.0] {
        let mut input = base_input();
        input.diameter_mm = diameter_mm;
        let res = head_loss(input);
        assert!(res.velocity_m_per_s.is_infinite());
        assert!(res.major_loss_m.is_infinite());
        assert!(res.minor_loss_m.is_infinite());
        assert!(res.reynolds_number.is_infinite());
        assert!(res.friction_factor.is_infinite());
    }
}

#[test]
fn laminar_formula_up_to_reynolds_4000() {
    // 유속은 점도와 무관하므로 먼저 뽑아 두고, 목표 레이놀즈수에 맞춰 점도를 역산한다.
    let velocity = head_loss(base_input()).velocity_m_per_s;
    let diameter_m = 0.1;

    let mut input = base_input();
    input.kinematic_viscosity_m2_per_s = velocity * diameter_m / 3999.0;
    let res = head_loss(input);
    assert!(res.reynolds_number <= 4000.0, "Re={}", res.reynolds_number);
    assert!(
        (res.friction_factor - 64.0 / res.reynolds_number).abs() < 1e-12,
        "f={}",
        res.friction_factor
    );
}

#[test]
fn turbulent_formula_above_reynolds_4000() {
    let velocity = head_loss(base_input()).velocity_m_per_s;
    let diameter_m = 0.1;
    let roughness_m = 0.15e-3;

    let mut input = base_input();
    input.kinematic_viscosity_m2_per_s = velocity * diameter_m / 4001.0;
    let res = head_loss(input);
    assert!(res.reynolds_number > 4000.0, "Re={}", res.reynolds_number);

    let log_term =
        roughness_m / (3.7 * diameter_m) + 5.74 / res.reynolds_number.powf(0.9);
    let expected = 0.25 / log_term.log10().powi(2);
    assert!(
        (res.friction_factor - expected).abs() < 1e-12,
        "f={} expected={}",
        res.friction_factor,
        expected
    );
    assert!((res.friction_factor - 64.0 / res.reynolds_number).abs() > 1e-6);
}

#[test]
fn nonpositive_viscosity_gives_zero_reynolds_and_friction() {
    for nu in [0.0, -1.0e-6] {
        let mut input = base_input();
        input.kinematic_viscosity_m2_per_s = nu;
        let res = head_loss(input);
        assert_eq!(res.reynolds_number, 0.0);
        assert_eq!(res.friction_factor, 0.0);
        assert_eq!(res.major_loss_m, 0.0);
        // 국부손실은 마찰계수와 무관하므로 남는다.
        assert!(res.minor_loss_m > 0.0);
    }
}

#[test]
fn nonpositive_log_argument_keeps_friction_factor_zero() {
    // 음수 거칠기로 로그 인자를 0 이하로 만들면 마찰계수는 0으로 남는다.
    let mut input = base_input();
    input.roughness_mm = -1.0;
    let res = head_loss(input);
    assert!(res.reynolds_number > 4000.0);
    assert_eq!(res.friction_factor, 0.0);
    assert_eq!(res.major_loss_m, 0.0);
    assert!(res.minor_loss_m > 0.0);
}
