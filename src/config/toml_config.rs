use crate::core::formatter::parse_utc_offset;
use crate::domain::model::DateStyle;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DateError, Result};
use crate::utils::validation::{self, Validate};
use crate::adapters::clock::FixedClock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub clock: ClockConfig,
    pub output: OutputConfig,
    pub template: Option<TemplateConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub utc_offset: Option<String>,
    pub fixed_now: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub style: Option<DateStyle>,
    pub days: Option<f64>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub input: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DateError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MOCK_NOW})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(offset) = &self.clock.utc_offset {
            parse_utc_offset(offset)?;
        }

        if let Some(now) = &self.clock.fixed_now {
            FixedClock::parse(now)?;
        }

        if let Some(days) = self.output.days {
            validation::validate_finite("output.days", days)?;
        }

        if let Some(template) = &self.template {
            let input = validation::validate_required_field("template.input", &template.input)?;
            validation::validate_path("template.input", input)?;

            if let Some(output) = &template.output {
                validation::validate_path("template.output", output)?;
            }
        }

        if let Some(level) = self.log_level() {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn utc_offset(&self) -> Option<&str> {
        self.clock.utc_offset.as_deref()
    }

    fn fixed_now(&self) -> Option<&str> {
        self.clock.fixed_now.as_deref()
    }

    fn style(&self) -> Option<DateStyle> {
        self.output.style
    }

    fn days(&self) -> Option<f64> {
        self.output.days
    }

    fn json_output(&self) -> Option<bool> {
        self.output.json
    }

    fn template_input(&self) -> Option<&str> {
        self.template.as_ref().and_then(|t| t.input.as_deref())
    }

    fn template_output(&self) -> Option<&str> {
        self.template.as_ref().and_then(|t| t.output.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
