//! 대표 유체의 밀도/동점도 상수 테이블과 조회 함수를 제공한다.
//! 값은 20°C 부근 대표치이며 설계 시 실제 물성으로 검증해야 한다.

/// 유체 물성 레코드.
#[derive(Debug, Clone, Copy)]
pub struct FluidData {
    pub code: &'static str,
    pub name: &'static str,
    /// 밀도 [kg/m3]
    pub density_kg_per_m3: f64,
    /// 동점도 [m2/s]
    pub kinematic_viscosity_m2_per_s: f64,
}

pub fn fluids() -> &'static [FluidData] {
    FLUIDS
}

pub fn find_fluid(code: &str) -> Option<&'static FluidData> {
    FLUIDS
        .iter()
        .find(|f| f.code.eq_ignore_ascii_case(code) || f.name.eq_ignore_ascii_case(code))
}

const FLUIDS: &[FluidData] = &[
    FluidData {
        code: "water20",
        name: "Water 20°C",
        density_kg_per_m3: 998.2,
        kinematic_viscosity_m2_per_s: 1.004e-6,
    },
    FluidData {
        code: "ethanol20",
        name: "Ethanol 20°C",
        density_kg_per_m3: 789.0,
        kinematic_viscosity_m2_per_s: 1.51e-6,
    },
    FluidData {
        code: "glycerine20",
        name: "Glycerine 20°C",
        density_kg_per_m3: 1261.0,
        kinematic_viscosity_m2_per_s: 1.49e-3,
    },
    FluidData {
        code: "lightoil",
        name: "Light Oil (generic)",
        density_kg_per_m3: 880.0,
        kinematic_viscosity_m2_per_s: 1.5e-5,
    },
];
