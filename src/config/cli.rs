use crate::domain::model::DateStyle;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mock-dates")]
#[command(about = "Date strings for mock server responses")]
pub struct CliConfig {
    /// Days to add to now (fractional and negative values allowed)
    #[arg(long, allow_hyphen_values = true)]
    pub days: Option<f64>,

    /// Output style
    #[arg(long, value_enum)]
    pub style: Option<DateStyle>,

    /// Present dates at this UTC offset, e.g. +12:00
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<String>,

    /// Pin "now" to an RFC 3339 timestamp
    #[arg(long)]
    pub now: Option<String>,

    /// Template file with {{date.short}} / {{date.long}} placeholders
    #[arg(long)]
    pub template: Option<String>,

    /// Where to write the rendered template (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print every format of the instant as JSON
    #[arg(long, conflicts_with = "no_json")]
    pub json: bool,

    /// Print only the styled date, even when the config file enables JSON
    #[arg(long)]
    pub no_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn utc_offset(&self) -> Option<&str> {
        self.utc_offset.as_deref()
    }

    fn fixed_now(&self) -> Option<&str> {
        self.now.as_deref()
    }

    fn style(&self) -> Option<DateStyle> {
        self.style
    }

    fn days(&self) -> Option<f64> {
        self.days
    }

    // 兩個旗標都沒給時交給設定檔決定
    fn json_output(&self) -> Option<bool> {
        match (self.json, self.no_json) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }

    fn template_input(&self) -> Option<&str> {
        self.template.as_deref()
    }

    fn template_output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(days) = self.days {
            validation::validate_finite("--days", days)?;
        }

        for (field, path) in [
            ("--template", &self.template),
            ("--output", &self.output),
            ("--config", &self.config),
        ] {
            if let Some(path) = path {
                validation::validate_path(field, path)?;
            }
        }

        Ok(())
    }
}
