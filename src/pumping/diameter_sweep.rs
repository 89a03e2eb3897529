use super::energy::{energy_cost, EnergyCostInput};
use super::head_loss::{head_loss, HeadLossInput};

/// 스윕 표본 개수.
pub const SWEEP_SAMPLES: usize = 20;

/// 후보 내경 하한 [mm].
const MIN_DIAMETER_MM: f64 = 25.0;

/// 직경-비용 스윕 입력. 내경을 제외한 배관/운전 조건은 고정된다.
#[derive(Debug, Clone)]
pub struct DiameterSweepInput {
    /// 기준 내경 [mm]
    pub base_diameter_mm: f64,
    /// 기하학적 양정(고저차) [m]
    pub geometric_head_m: f64,
    /// 체적 유량 [m3/h]
    pub flow_m3_per_h: f64,
    /// 배관 길이 [m]
    pub length_m: f64,
    /// 절대 거칠기 [mm]
    pub roughness_mm: f64,
    /// 피팅 손실계수 총합
    pub fittings_k_sum: f64,
    /// 유체 밀도 [kg/m3]
    pub density_kg_per_m3: f64,
    /// 동점도 [m2/s]
    pub kinematic_viscosity_m2_per_s: f64,
    /// 펌프 효율(0~1)
    pub pump_efficiency: f64,
    /// 모터 효율(0~1)
    pub motor_efficiency: f64,
    /// 1일 운전 시간 [h]
    pub hours_per_day: f64,
    /// 전력 단가 [통화/kWh]
    pub tariff_per_kwh: f64,
}

/// 스윕 한 점: 후보 내경과 그때의 연간 전력 비용.
#[derive(Debug, Clone, Copy)]
pub struct SweepPoint {
    /// 후보 내경 [mm]
    pub diameter_mm: f64,
    /// 연간 전력 비용
    pub annual_cost: f64,
}

/// [max(25, 0.5·기준), 2·기준] 구간을 균등 분할한 내경 20개마다 연간 전력 비용을 계산한다.
///
/// 표본마다 손실수두 → 전양정(기하 양정 + 주손실 + 국부손실) → 에너지 비용 순으로
/// 평가하고, 내경 오름차순 수열을 반환한다. 외부 차트 계층이 그대로 소비한다.
pub fn diameter_cost_sweep(input: DiameterSweepInput) -> Vec<SweepPoint> {
    let start_mm = MIN_DIAMETER_MM.max(input.base_diameter_mm * 0.5);
    let end_mm = input.base_diameter_mm * 2.0;
    let step_mm = (end_mm - start_mm) / (SWEEP_SAMPLES - 1) as f64;

    let mut points = Vec::with_capacity(SWEEP_SAMPLES);
    for i in 0..SWEEP_SAMPLES {
        let diameter_mm = start_mm + step_mm * i as f64;
        let losses = head_loss(HeadLossInput {
            flow_m3_per_h: input.flow_m3_per_h,
            diameter_mm,
            length_m: input.length_m,
            roughness_mm: input.roughness_mm,
            fittings_k_sum: input.fittings_k_sum,
            kinematic_viscosity_m2_per_s: input.kinematic_viscosity_m2_per_s,
        });
        let total_head_m = input.geometric_head_m + losses.major_loss_m + losses.minor_loss_m;
        let energy = energy_cost(EnergyCostInput {
            flow_m3_per_h: input.flow_m3_per_h,
            total_head_m,
            pump_efficiency: input.pump_efficiency,
            motor_efficiency: input.motor_efficiency,
            hours_per_day: input.hours_per_day,
            tariff_per_kwh: input.tariff_per_kwh,
            density_kg_per_m3: input.density_kg_per_m3,
        });
        points.push(SweepPoint {
            diameter_mm,
            annual_cost: energy.annual_cost,
        });
    }
    points
}
