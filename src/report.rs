use std::fs;
use std::path::Path;

use crate::i18n::{keys, Translator};
use crate::pumping::{Advisory, EnergyCostInput, EnergyCostResult, HeadLossResult};

/// 보고서 본문 데이터.
///
/// 입력/결과는 표시 순서를 유지해야 하므로 맵 대신 (라벨, 값) 쌍 목록으로 담는다.
/// 렌더링(텍스트/PDF 등)은 외부 계층의 몫이고, 이 모듈은 기본 텍스트 렌더링만 제공한다.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub inputs: Vec<(String, String)>,
    pub results: Vec<(String, String)>,
    pub advisories: Vec<String>,
}

/// 개선 제안 항목을 표시용 문자열로 변환한다.
pub fn advisory_message(advisory: &Advisory, tr: &Translator) -> String {
    match advisory {
        Advisory::HighVelocity { velocity_m_per_s } => tr
            .t(keys::ADVISORY_HIGH_VELOCITY)
            .replace("{velocity}", &format!("{velocity_m_per_s:.2}")),
        Advisory::LowVelocity { velocity_m_per_s } => tr
            .t(keys::ADVISORY_LOW_VELOCITY)
            .replace("{velocity}", &format!("{velocity_m_per_s:.2}")),
        Advisory::LowPumpEfficiency => tr.t(keys::ADVISORY_PUMP_EFFICIENCY).to_string(),
        Advisory::LowMotorEfficiency => tr.t(keys::ADVISORY_MOTOR_EFFICIENCY).to_string(),
        Advisory::VariableSpeedDrive => tr.t(keys::ADVISORY_VSD).to_string(),
        Advisory::PreventiveMaintenance => tr.t(keys::ADVISORY_MAINTENANCE).to_string(),
    }
}

/// 분석 입력과 결과로 보고서 데이터를 조립한다.
///
/// 손실수두 결과가 없으면(전양정 직접 입력) 유속 항목과 개선 제안은 비워 둔다.
pub fn build_report(
    fluid_name: &str,
    energy_input: &EnergyCostInput,
    energy: &EnergyCostResult,
    losses: Option<&HeadLossResult>,
    advisories: &[Advisory],
    tr: &Translator,
) -> ReportData {
    let mut inputs = vec![
        (tr.t(keys::LABEL_FLUID).to_string(), fluid_name.to_string()),
        (
            tr.t(keys::LABEL_FLOW).to_string(),
            format!("{:.1} m3/h", energy_input.flow_m3_per_h),
        ),
        (
            tr.t(keys::LABEL_TOTAL_HEAD).to_string(),
            format!("{:.2} m", energy_input.total_head_m),
        ),
        (
            tr.t(keys::LABEL_PUMP_EFFICIENCY).to_string(),
            format!("{:.0}%", energy_input.pump_efficiency * 100.0),
        ),
        (
            tr.t(keys::LABEL_MOTOR_EFFICIENCY).to_string(),
            format!("{:.0}%", energy_input.motor_efficiency * 100.0),
        ),
        (
            tr.t(keys::LABEL_HOURS_PER_DAY).to_string(),
            format!("{:.1} h", energy_input.hours_per_day),
        ),
        (
            tr.t(keys::LABEL_TARIFF).to_string(),
            format!("{:.2}/kWh", energy_input.tariff_per_kwh),
        ),
    ];
    if let Some(losses) = losses {
        inputs.push((
            tr.t(keys::LABEL_VELOCITY).to_string(),
            format!("{:.2} m/s", losses.velocity_m_per_s),
        ));
    }

    let results = vec![
        (
            tr.t(keys::RESULT_ELECTRICAL_POWER).to_string(),
            format!("{:.2} kW", energy.electrical_power_kw),
        ),
        (
            tr.t(keys::RESULT_MONTHLY_COST).to_string(),
            format!("{:.2}", energy.monthly_cost),
        ),
        (
            tr.t(keys::RESULT_ANNUAL_COST).to_string(),
            format!("{:.2}", energy.annual_cost),
        ),
    ];

    ReportData {
        inputs,
        results,
        advisories: advisories
            .iter()
            .map(|a| advisory_message(a, tr))
            .collect(),
    }
}

/// 보고서 데이터를 일반 텍스트 문서로 렌더링한다.
pub fn render_text(report: &ReportData, tr: &Translator) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n\n", tr.t(keys::REPORT_TITLE)));

    out.push_str(&format!("-- {} --\n", tr.t(keys::REPORT_SECTION_INPUTS)));
    for (label, value) in &report.inputs {
        out.push_str(&format!("  {label}: {value}\n"));
    }
    out.push('\n');

    out.push_str(&format!("-- {} --\n", tr.t(keys::REPORT_SECTION_RESULTS)));
    for (label, value) in &report.results {
        out.push_str(&format!("  {label}: {value}\n"));
    }

    if !report.advisories.is_empty() {
        out.push('\n');
        out.push_str(&format!(
            "-- {} --\n",
            tr.t(keys::REPORT_SECTION_ADVISORIES)
        ));
        for advisory in &report.advisories {
            out.push_str(&format!("  - {advisory}\n"));
        }
    }
    out
}

/// 렌더링된 보고서를 파일로 저장한다.
pub fn save_report(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)
}
