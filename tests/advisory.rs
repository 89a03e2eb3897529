//! 개선 제안 규칙 순서/배타성 테스트.
use pump_system_toolbox::pumping::{advisories, Advisory, AdvisoryInput};

fn input(velocity: f64, pump_eff: f64, motor_eff: f64, annual_cost: f64) -> AdvisoryInput {
    AdvisoryInput {
        pump_efficiency: pump_eff,
        motor_efficiency: motor_eff,
        annual_cost,
        velocity_m_per_s: velocity,
    }
}

fn velocity_advisory_count(list: &[Advisory]) -> usize {
    list.iter()
        .filter(|a| {
            matches!(
                a,
                Advisory::HighVelocity { .. } | Advisory::LowVelocity { .. }
            )
        })
        .count()
}

#[test]
fn maintenance_advisory_is_always_present_and_last() {
    for velocity in [0.1, 1.5, 5.0] {
        let list = advisories(input(velocity, 0.9, 0.95, 100.0));
        assert_eq!(list.last(), Some(&Advisory::PreventiveMaintenance));
        assert_eq!(
            list.iter()
                .filter(|a| **a == Advisory::PreventiveMaintenance)
                .count(),
            1
        );
    }
}

#[test]
fn velocity_rules_are_mutually_exclusive() {
    let high = advisories(input(4.2, 0.9, 0.95, 100.0));
    assert_eq!(velocity_advisory_count(&high), 1);
    assert!(matches!(high[0], Advisory::HighVelocity { .. }));

    let low = advisories(input(0.2, 0.9, 0.95, 100.0));
    assert_eq!(velocity_advisory_count(&low), 1);
    assert!(matches!(low[0], Advisory::LowVelocity { .. }));
}

#[test]
fn no_velocity_advisory_between_limits() {
    for velocity in [0.5, 1.7, 3.0] {
        let list = advisories(input(velocity, 0.9, 0.95, 100.0));
        assert_eq!(velocity_advisory_count(&list), 0, "v={velocity}");
    }
}

#[test]
fn thresholds_are_strict_comparisons() {
    // 경계값 자체는 어떤 규칙도 발동시키지 않는다.
    let list = advisories(input(1.5, 0.6, 0.85, 5000.0));
    assert_eq!(list, vec![Advisory::PreventiveMaintenance]);
}

#[test]
fn all_rules_fire_in_fixed_order() {
    let list = advisories(input(4.0, 0.5, 0.8, 6000.0));
    assert_eq!(list.len(), 5);
    assert!(matches!(list[0], Advisory::HighVelocity { velocity_m_per_s } if velocity_m_per_s == 4.0));
    assert_eq!(list[1], Advisory::LowPumpEfficiency);
    assert_eq!(list[2], Advisory::LowMotorEfficiency);
    assert_eq!(list[3], Advisory::VariableSpeedDrive);
    assert_eq!(list[4], Advisory::PreventiveMaintenance);
}

#[test]
fn efficiency_rules_fire_independently_of_velocity() {
    let list = advisories(input(1.5, 0.5, 0.8, 100.0));
    assert_eq!(
        list,
        vec![
            Advisory::LowPumpEfficiency,
            Advisory::LowMotorEfficiency,
            Advisory::PreventiveMaintenance,
        ]
    );
}
