use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ENERGY_MANUAL: &str = "main_menu.energy_manual";
    pub const MAIN_MENU_PIPING_ANALYSIS: &str = "main_menu.piping_analysis";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const ENERGY_HEADING: &str = "energy.heading";
    pub const PIPING_HEADING: &str = "piping.heading";

    pub const PROMPT_FLUID_SELECT: &str = "prompt.fluid_select";
    pub const ERROR_UNKNOWN_FLUID: &str = "error.unknown_fluid";
    pub const PROMPT_FLOW: &str = "prompt.flow";
    pub const PROMPT_TOTAL_HEAD: &str = "prompt.total_head";
    pub const PROMPT_GEOMETRIC_HEAD: &str = "prompt.geometric_head";
    pub const PROMPT_PIPE_LENGTH: &str = "prompt.pipe_length";
    pub const PROMPT_PIPE_DIAMETER: &str = "prompt.pipe_diameter";
    pub const PROMPT_ROUGHNESS: &str = "prompt.roughness";
    pub const PROMPT_FITTINGS_K: &str = "prompt.fittings_k";
    pub const PROMPT_PUMP_EFFICIENCY: &str = "prompt.pump_efficiency";
    pub const PROMPT_MOTOR_EFFICIENCY: &str = "prompt.motor_efficiency";
    pub const PROMPT_HOURS_PER_DAY: &str = "prompt.hours_per_day";
    pub const PROMPT_TARIFF: &str = "prompt.tariff";

    pub const ERROR_INVALID_GEOMETRY: &str = "error.invalid_geometry";

    pub const RESULT_VELOCITY: &str = "result.velocity";
    pub const RESULT_REYNOLDS: &str = "result.reynolds";
    pub const RESULT_FRICTION_FACTOR: &str = "result.friction_factor";
    pub const RESULT_MAJOR_LOSS: &str = "result.major_loss";
    pub const RESULT_MINOR_LOSS: &str = "result.minor_loss";
    pub const RESULT_TOTAL_HEAD: &str = "result.total_head";
    pub const RESULT_ELECTRICAL_POWER: &str = "result.electrical_power";
    pub const RESULT_MONTHLY_CONSUMPTION: &str = "result.monthly_consumption";
    pub const RESULT_MONTHLY_COST: &str = "result.monthly_cost";
    pub const RESULT_ANNUAL_COST: &str = "result.annual_cost";

    pub const ADVISORY_HEADING: &str = "advisory.heading";
    pub const ADVISORY_HIGH_VELOCITY: &str = "advisory.high_velocity";
    pub const ADVISORY_LOW_VELOCITY: &str = "advisory.low_velocity";
    pub const ADVISORY_PUMP_EFFICIENCY: &str = "advisory.pump_efficiency";
    pub const ADVISORY_MOTOR_EFFICIENCY: &str = "advisory.motor_efficiency";
    pub const ADVISORY_VSD: &str = "advisory.vsd";
    pub const ADVISORY_MAINTENANCE: &str = "advisory.maintenance";

    pub const PROMPT_SHOW_SWEEP: &str = "prompt.show_sweep";
    pub const SWEEP_HEADING: &str = "sweep.heading";
    pub const SWEEP_COL_DIAMETER: &str = "sweep.col_diameter";
    pub const SWEEP_COL_ANNUAL_COST: &str = "sweep.col_annual_cost";
    pub const SWEEP_CAPTION: &str = "sweep.caption";

    pub const PROMPT_SAVE_REPORT: &str = "prompt.save_report";
    pub const PROMPT_REPORT_PATH: &str = "prompt.report_path";
    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_SECTION_INPUTS: &str = "report.section_inputs";
    pub const REPORT_SECTION_RESULTS: &str = "report.section_results";
    pub const REPORT_SECTION_ADVISORIES: &str = "report.section_advisories";
    pub const REPORT_SAVED: &str = "report.saved";

    pub const LABEL_FLUID: &str = "label.fluid";
    pub const LABEL_FLOW: &str = "label.flow";
    pub const LABEL_TOTAL_HEAD: &str = "label.total_head";
    pub const LABEL_PUMP_EFFICIENCY: &str = "label.pump_efficiency";
    pub const LABEL_MOTOR_EFFICIENCY: &str = "label.motor_efficiency";
    pub const LABEL_HOURS_PER_DAY: &str = "label.hours_per_day";
    pub const LABEL_TARIFF: &str = "label.tariff";
    pub const LABEL_VELOCITY: &str = "label.velocity";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Pump System Toolbox ===",
        MAIN_MENU_ENERGY_MANUAL => "1) 에너지 분석 (전양정 직접 입력)",
        MAIN_MENU_PIPING_ANALYSIS => "2) 배관 기반 분석 (손실수두 계산)",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ENERGY_HEADING => "\n-- 에너지 분석 --",
        PIPING_HEADING => "\n-- 배관 기반 분석 --",
        PROMPT_FLUID_SELECT => "유체 선택 (번호 또는 코드)",
        ERROR_UNKNOWN_FLUID => "지원하지 않는 유체입니다.",
        PROMPT_FLOW => "체적 유량 [m3/h]",
        PROMPT_TOTAL_HEAD => "전양정 [m]",
        PROMPT_GEOMETRIC_HEAD => "기하학적 양정(고저차) [m]",
        PROMPT_PIPE_LENGTH => "배관 길이 [m]",
        PROMPT_PIPE_DIAMETER => "배관 내경 [mm]",
        PROMPT_ROUGHNESS => "절대 거칠기 ε [mm] (탄소강 약 0.15)",
        PROMPT_FITTINGS_K => "피팅 K 합계 (없으면 0)",
        PROMPT_PUMP_EFFICIENCY => "펌프 효율 [%]",
        PROMPT_MOTOR_EFFICIENCY => "모터 효율 [%]",
        PROMPT_HOURS_PER_DAY => "1일 운전 시간 [h]",
        PROMPT_TARIFF => "전력 단가 [통화/kWh]",
        ERROR_INVALID_GEOMETRY => "내경이 0 이하라 손실수두를 계산할 수 없습니다.",
        RESULT_VELOCITY => "유속:",
        RESULT_REYNOLDS => "레이놀즈수:",
        RESULT_FRICTION_FACTOR => "마찰계수:",
        RESULT_MAJOR_LOSS => "주손실:",
        RESULT_MINOR_LOSS => "국부손실:",
        RESULT_TOTAL_HEAD => "전양정:",
        RESULT_ELECTRICAL_POWER => "소비 전력:",
        RESULT_MONTHLY_CONSUMPTION => "월간 소비전력량(30일):",
        RESULT_MONTHLY_COST => "월간 비용(30일):",
        RESULT_ANNUAL_COST => "연간 비용(365일):",
        ADVISORY_HEADING => "\n-- 개선 제안 --",
        ADVISORY_HIGH_VELOCITY => {
            "경고: 유속({velocity} m/s)이 높아 손실수두 증가와 침식 위험이 있습니다. 배관 내경 확대를 검토하세요."
        }
        ADVISORY_LOW_VELOCITY => {
            "주의: 유속({velocity} m/s)이 낮아 고형물이 침전할 수 있습니다(해당되는 경우)."
        }
        ADVISORY_PUMP_EFFICIENCY => {
            "펌프 효율이 60% 미만입니다. 고효율 최신 모델로의 교체를 검토하세요."
        }
        ADVISORY_MOTOR_EFFICIENCY => {
            "모터 효율이 85% 미만입니다. 고효율(IE3+) 모터로 큰 절감이 가능합니다."
        }
        ADVISORY_VSD => "유량이 변동한다면 인버터(가변속 구동)로 소비 전력을 크게 줄일 수 있습니다.",
        ADVISORY_MAINTENANCE => "예방 정비를 수행하고 누설 여부와 임펠러·씰 상태를 점검하세요.",
        PROMPT_SHOW_SWEEP => "직경-비용 스윕 표를 출력할까요? (y/N): ",
        SWEEP_HEADING => "\n-- 직경별 연간 비용 --",
        SWEEP_COL_DIAMETER => "내경 [mm]",
        SWEEP_COL_ANNUAL_COST => "연간 비용",
        SWEEP_CAPTION => "내경이 커질수록 손실수두가 줄어 에너지 비용이 감소합니다.",
        PROMPT_SAVE_REPORT => "보고서를 파일로 저장할까요? (y/N): ",
        PROMPT_REPORT_PATH => "저장 경로",
        REPORT_TITLE => "펌프 시스템 에너지 분석 보고서",
        REPORT_SECTION_INPUTS => "입력 파라미터",
        REPORT_SECTION_RESULTS => "분석 결과",
        REPORT_SECTION_ADVISORIES => "개선 제안",
        REPORT_SAVED => "보고서를 저장했습니다:",
        LABEL_FLUID => "유체",
        LABEL_FLOW => "유량",
        LABEL_TOTAL_HEAD => "전양정",
        LABEL_PUMP_EFFICIENCY => "펌프 효율",
        LABEL_MOTOR_EFFICIENCY => "모터 효율",
        LABEL_HOURS_PER_DAY => "운전 시간",
        LABEL_TARIFF => "전력 단가",
        LABEL_VELOCITY => "유속",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) auto",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어 설정이 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Pump System Toolbox ===",
        MAIN_MENU_ENERGY_MANUAL => "1) Energy analysis (enter total head)",
        MAIN_MENU_PIPING_ANALYSIS => "2) Piping analysis (compute head loss)",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ENERGY_HEADING => "\n-- Energy Analysis --",
        PIPING_HEADING => "\n-- Piping Analysis --",
        PROMPT_FLUID_SELECT => "Select fluid (number or code)",
        ERROR_UNKNOWN_FLUID => "Unsupported fluid.",
        PROMPT_FLOW => "Volumetric flow [m3/h]",
        PROMPT_TOTAL_HEAD => "Total head [m]",
        PROMPT_GEOMETRIC_HEAD => "Geometric head (static lift) [m]",
        PROMPT_PIPE_LENGTH => "Pipe length [m]",
        PROMPT_PIPE_DIAMETER => "Pipe inner diameter [mm]",
        PROMPT_ROUGHNESS => "Absolute roughness ε [mm] (carbon steel ~0.15)",
        PROMPT_FITTINGS_K => "Fittings K sum (0 if none)",
        PROMPT_PUMP_EFFICIENCY => "Pump efficiency [%]",
        PROMPT_MOTOR_EFFICIENCY => "Motor efficiency [%]",
        PROMPT_HOURS_PER_DAY => "Operating hours per day [h]",
        PROMPT_TARIFF => "Energy tariff [currency/kWh]",
        ERROR_INVALID_GEOMETRY => "Pipe diameter is zero or negative; head loss cannot be computed.",
        RESULT_VELOCITY => "Velocity:",
        RESULT_REYNOLDS => "Reynolds number:",
        RESULT_FRICTION_FACTOR => "Friction factor:",
        RESULT_MAJOR_LOSS => "Major loss:",
        RESULT_MINOR_LOSS => "Minor loss:",
        RESULT_TOTAL_HEAD => "Total head:",
        RESULT_ELECTRICAL_POWER => "Electrical power:",
        RESULT_MONTHLY_CONSUMPTION => "Monthly consumption (30 days):",
        RESULT_MONTHLY_COST => "Monthly cost (30 days):",
        RESULT_ANNUAL_COST => "Annual cost (365 days):",
        ADVISORY_HEADING => "\n-- Advisories --",
        ADVISORY_HIGH_VELOCITY => {
            "Warning: fluid velocity ({velocity} m/s) is high, causing large head losses and erosion risk. Consider a larger pipe diameter."
        }
        ADVISORY_LOW_VELOCITY => {
            "Caution: fluid velocity ({velocity} m/s) is low and may allow solids to settle (where applicable)."
        }
        ADVISORY_PUMP_EFFICIENCY => {
            "Pump efficiency is below 60%. Consider replacing it with a modern high-efficiency model."
        }
        ADVISORY_MOTOR_EFFICIENCY => {
            "Motor efficiency is below 85%. Premium-efficiency (IE3+) motors can yield large savings."
        }
        ADVISORY_VSD => {
            "If the flow demand varies, a variable-speed drive can drastically reduce energy consumption."
        }
        ADVISORY_MAINTENANCE => {
            "Perform preventive maintenance and check for leaks and the condition of impellers and seals."
        }
        PROMPT_SHOW_SWEEP => "Print the diameter-cost sweep table? (y/N): ",
        SWEEP_HEADING => "\n-- Annual Cost by Diameter --",
        SWEEP_COL_DIAMETER => "ID [mm]",
        SWEEP_COL_ANNUAL_COST => "Annual cost",
        SWEEP_CAPTION => "Energy cost falls with larger diameters as head loss decreases.",
        PROMPT_SAVE_REPORT => "Save the report to a file? (y/N): ",
        PROMPT_REPORT_PATH => "Report path",
        REPORT_TITLE => "Pump System Energy Analysis Report",
        REPORT_SECTION_INPUTS => "Input Parameters",
        REPORT_SECTION_RESULTS => "Analysis Results",
        REPORT_SECTION_ADVISORIES => "Advisories",
        REPORT_SAVED => "Report saved:",
        LABEL_FLUID => "Fluid",
        LABEL_FLOW => "Flow",
        LABEL_TOTAL_HEAD => "Total head",
        LABEL_PUMP_EFFICIENCY => "Pump efficiency",
        LABEL_MOTOR_EFFICIENCY => "Motor efficiency",
        LABEL_HOURS_PER_DAY => "Hours/day",
        LABEL_TARIFF => "Tariff",
        LABEL_VELOCITY => "Velocity",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) auto",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        _ => return None,
    })
}
