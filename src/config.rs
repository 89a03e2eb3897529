use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 분석 입력 폼의 기본값 모음. config.toml로 조정할 수 있다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDefaults {
    /// 체적 유량 [m3/h]
    pub flow_m3_per_h: f64,
    /// 전양정 직접 입력 기본값 [m]
    pub total_head_m: f64,
    /// 기하학적 양정(고저차) [m]
    pub geometric_head_m: f64,
    /// 배관 길이 [m]
    pub pipe_length_m: f64,
    /// 배관 내경 [mm]
    pub pipe_diameter_mm: f64,
    /// 절대 거칠기 [mm]
    pub roughness_mm: f64,
    /// 피팅 손실계수 총합
    pub fittings_k_sum: f64,
    /// 펌프 효율(0~1)
    pub pump_efficiency: f64,
    /// 모터 효율(0~1)
    pub motor_efficiency: f64,
    /// 1일 운전 시간 [h]
    pub hours_per_day: f64,
    /// 전력 단가 [통화/kWh]
    pub tariff_per_kwh: f64,
    /// 기본 유체 코드 (fluid_db의 code 참조)
    pub fluid_code: String,
}

impl Default for AnalysisDefaults {
    fn default() -> Self {
        Self {
            flow_m3_per_h: 50.0,
            total_head_m: 30.0,
            geometric_head_m: 15.0,
            pipe_length_m: 100.0,
            pipe_diameter_mm: 100.0,
            roughness_mm: 0.15,
            fittings_k_sum: 5.0,
            pump_efficiency: 0.70,
            motor_efficiency: 0.90,
            hours_per_day: 8.0,
            tariff_per_kwh: 0.75,
            fluid_code: "water20".to_string(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 표시 언어 코드 (auto/ko/en)
    pub language: String,
    pub defaults: AnalysisDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            defaults: AnalysisDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
