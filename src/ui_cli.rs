use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::config::Config;
use crate::fluid_db::{self, FluidData};
use crate::i18n::{keys, Translator};
use crate::pumping::{
    advisories, diameter_cost_sweep, energy_cost, head_loss, Advisory, AdvisoryInput,
    DiameterSweepInput, EnergyCostInput, HeadLossInput,
};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EnergyManual,
    PipingAnalysis,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ENERGY_MANUAL));
    println!("{}", tr.t(keys::MAIN_MENU_PIPING_ANALYSIS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EnergyManual),
            "2" => return Ok(MenuChoice::PipingAnalysis),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 전양정을 직접 입력받는 에너지 분석 메뉴를 처리한다.
///
/// 손실수두 계산을 거치지 않으므로 유속 기반 개선 제안은 생성하지 않는다.
pub fn handle_energy_manual(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ENERGY_HEADING));
    let d = &cfg.defaults;

    let fluid = read_fluid(tr, &d.fluid_code)?;
    let flow = read_f64_or(tr, keys::PROMPT_FLOW, d.flow_m3_per_h)?;
    let total_head = read_f64_or(tr, keys::PROMPT_TOTAL_HEAD, d.total_head_m)?;
    let (pump_eff, motor_eff) = read_efficiencies(tr, cfg)?;
    let hours = read_f64_or(tr, keys::PROMPT_HOURS_PER_DAY, d.hours_per_day)?;
    let tariff = read_f64_or(tr, keys::PROMPT_TARIFF, d.tariff_per_kwh)?;

    let energy_input = EnergyCostInput {
        flow_m3_per_h: flow,
        total_head_m: total_head,
        pump_efficiency: pump_eff,
        motor_efficiency: motor_eff,
        hours_per_day: hours,
        tariff_per_kwh: tariff,
        density_kg_per_m3: fluid.density_kg_per_m3,
    };
    let energy = energy_cost(energy_input.clone());
    print_energy_result(tr, &energy);

    offer_report_save(tr, fluid, &energy_input, &energy, None, &[])?;
    Ok(())
}

/// 배관 제원에서 손실수두를 계산하는 분석 메뉴를 처리한다.
pub fn handle_piping_analysis(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PIPING_HEADING));
    let d = &cfg.defaults;

    let fluid = read_fluid(tr, &d.fluid_code)?;
    let flow = read_f64_or(tr, keys::PROMPT_FLOW, d.flow_m3_per_h)?;
    let geometric_head = read_f64_or(tr, keys::PROMPT_GEOMETRIC_HEAD, d.geometric_head_m)?;
    let length = read_f64_or(tr, keys::PROMPT_PIPE_LENGTH, d.pipe_length_m)?;
    let diameter = read_f64_or(tr, keys::PROMPT_PIPE_DIAMETER, d.pipe_diameter_mm)?;
    let roughness = read_f64_or(tr, keys::PROMPT_ROUGHNESS, d.roughness_mm)?;
    let fittings_k = read_f64_or(tr, keys::PROMPT_FITTINGS_K, d.fittings_k_sum)?;
    let (pump_eff, motor_eff) = read_efficiencies(tr, cfg)?;
    let hours = read_f64_or(tr, keys::PROMPT_HOURS_PER_DAY, d.hours_per_day)?;
    let tariff = read_f64_or(tr, keys::PROMPT_TARIFF, d.tariff_per_kwh)?;

    let losses = head_loss(HeadLossInput {
        flow_m3_per_h: flow,
        diameter_mm: diameter,
        length_m: length,
        roughness_mm: roughness,
        fittings_k_sum: fittings_k,
        kinematic_viscosity_m2_per_s: fluid.kinematic_viscosity_m2_per_s,
    });
    // 내경 0 이하는 전 필드 +∞ 센티널로 돌아오므로 여기서 걸러낸다.
    if !losses.velocity_m_per_s.is_finite() {
        println!("{}", tr.t(keys::ERROR_INVALID_GEOMETRY));
        return Ok(());
    }

    let total_head = geometric_head + losses.major_loss_m + losses.minor_loss_m;
    println!("{} {:.2} m/s", tr.t(keys::RESULT_VELOCITY), losses.velocity_m_per_s);
    println!("{} {:.2e}", tr.t(keys::RESULT_REYNOLDS), losses.reynolds_number);
    println!(
        "{} {:.4}",
        tr.t(keys::RESULT_FRICTION_FACTOR),
        losses.friction_factor
    );
    println!("{} {:.2} m", tr.t(keys::RESULT_MAJOR_LOSS), losses.major_loss_m);
    println!("{} {:.2} m", tr.t(keys::RESULT_MINOR_LOSS), losses.minor_loss_m);
    println!("{} {:.2} m", tr.t(keys::RESULT_TOTAL_HEAD), total_head);

    let energy_input = EnergyCostInput {
        flow_m3_per_h: flow,
        total_head_m: total_head,
        pump_efficiency: pump_eff,
        motor_efficiency: motor_eff,
        hours_per_day: hours,
        tariff_per_kwh: tariff,
        density_kg_per_m3: fluid.density_kg_per_m3,
    };
    let energy = energy_cost(energy_input.clone());
    print_energy_result(tr, &energy);

    let advisory_list = advisories(AdvisoryInput {
        pump_efficiency: pump_eff,
        motor_efficiency: motor_eff,
        annual_cost: energy.annual_cost,
        velocity_m_per_s: losses.velocity_m_per_s,
    });
    println!("{}", tr.t(keys::ADVISORY_HEADING));
    for advisory in &advisory_list {
        println!("- {}", report::advisory_message(advisory, tr));
    }

    if read_yes_no(tr.t(keys::PROMPT_SHOW_SWEEP))? {
        let points = diameter_cost_sweep(DiameterSweepInput {
            base_diameter_mm: diameter,
            geometric_head_m: geometric_head,
            flow_m3_per_h: flow,
            length_m: length,
            roughness_mm: roughness,
            fittings_k_sum: fittings_k,
            density_kg_per_m3: fluid.density_kg_per_m3,
            kinematic_viscosity_m2_per_s: fluid.kinematic_viscosity_m2_per_s,
            pump_efficiency: pump_eff,
            motor_efficiency: motor_eff,
            hours_per_day: hours,
            tariff_per_kwh: tariff,
        });
        println!("{}", tr.t(keys::SWEEP_HEADING));
        println!(
            "{:>12} {:>16}",
            tr.t(keys::SWEEP_COL_DIAMETER),
            tr.t(keys::SWEEP_COL_ANNUAL_COST)
        );
        for point in &points {
            println!("{:>12.1} {:>16.2}", point.diameter_mm, point.annual_cost);
        }
        println!("{}", tr.t(keys::SWEEP_CAPTION));
    }

    offer_report_save(tr, fluid, &energy_input, &energy, Some(&losses), &advisory_list)?;
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "ko".to_string(),
        "2" => "en".to_string(),
        "3" => "auto".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.language.clone()
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn print_energy_result(tr: &Translator, energy: &crate::pumping::EnergyCostResult) {
    println!(
        "{} {:.2} kW",
        tr.t(keys::RESULT_ELECTRICAL_POWER),
        energy.electrical_power_kw
    );
    println!(
        "{} {:.1} kWh",
        tr.t(keys::RESULT_MONTHLY_CONSUMPTION),
        energy.monthly_consumption_kwh
    );
    println!("{} {:.2}", tr.t(keys::RESULT_MONTHLY_COST), energy.monthly_cost);
    println!("{} {:.2}", tr.t(keys::RESULT_ANNUAL_COST), energy.annual_cost);
}

fn offer_report_save(
    tr: &Translator,
    fluid: &FluidData,
    energy_input: &EnergyCostInput,
    energy: &crate::pumping::EnergyCostResult,
    losses: Option<&crate::pumping::HeadLossResult>,
    advisory_list: &[Advisory],
) -> Result<(), AppError> {
    if !read_yes_no(tr.t(keys::PROMPT_SAVE_REPORT))? {
        return Ok(());
    }
    let path = read_line_or(tr.t(keys::PROMPT_REPORT_PATH), "pump_report.txt")?;
    let data = report::build_report(fluid.name, energy_input, energy, losses, advisory_list, tr);
    let text = report::render_text(&data, tr);
    report::save_report(Path::new(path.trim()), &text)?;
    println!("{} {}", tr.t(keys::REPORT_SAVED), path.trim());
    Ok(())
}

/// 효율 입력은 %로 받고 내부 계산용 0~1 소수로 바꾼다.
fn read_efficiencies(tr: &Translator, cfg: &Config) -> Result<(f64, f64), AppError> {
    let pump_pct = read_f64_or(
        tr,
        keys::PROMPT_PUMP_EFFICIENCY,
        cfg.defaults.pump_efficiency * 100.0,
    )?;
    let motor_pct = read_f64_or(
        tr,
        keys::PROMPT_MOTOR_EFFICIENCY,
        cfg.defaults.motor_efficiency * 100.0,
    )?;
    Ok((pump_pct / 100.0, motor_pct / 100.0))
}

fn read_fluid(tr: &Translator, default_code: &str) -> Result<&'static FluidData, AppError> {
    for (i, fluid) in fluid_db::fluids().iter().enumerate() {
        println!("{}) {}", i + 1, fluid.name);
    }
    loop {
        let sel = read_line(&format!(
            "{} [{default_code}]: ",
            tr.t(keys::PROMPT_FLUID_SELECT)
        ))?;
        let trimmed = sel.trim();
        if trimmed.is_empty() {
            if let Some(fluid) = fluid_db::find_fluid(default_code) {
                return Ok(fluid);
            }
        }
        if let Ok(n) = trimmed.parse::<usize>() {
            if n >= 1 && n <= fluid_db::fluids().len() {
                return Ok(&fluid_db::fluids()[n - 1]);
            }
        }
        if let Some(fluid) = fluid_db::find_fluid(trimmed) {
            return Ok(fluid);
        }
        println!("{}", tr.t(keys::ERROR_UNKNOWN_FLUID));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_line_or(prompt: &str, default: &str) -> Result<String, AppError> {
    let s = read_line(&format!("{prompt} [{default}]: "))?;
    if s.trim().is_empty() {
        Ok(default.to_string())
    } else {
        Ok(s)
    }
}

/// 기본값을 함께 보여주고, 빈 입력이면 기본값을 쓴다.
fn read_f64_or(tr: &Translator, prompt_key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} [{default}]: ", tr.t(prompt_key)))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_yes_no(prompt: &str) -> Result<bool, AppError> {
    let s = read_line(prompt)?;
    let t = s.trim();
    Ok(t.eq_ignore_ascii_case("y") || t.eq_ignore_ascii_case("yes"))
}
