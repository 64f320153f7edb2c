#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::adapters::clock::{ConfiguredClock, FixedClock, SystemClock};
use crate::core::formatter::{add_days_to_date, parse_utc_offset};
use crate::core::template::DateTemplate;
use crate::domain::model::{DateSnapshot, DateStyle};
use crate::domain::ports::{Clock, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation;
use chrono::{DateTime, FixedOffset};

/// 合併命令列與設定檔之後、已解析完成的設定
#[derive(Debug, Clone, PartialEq)]
pub struct DateSettings {
    pub utc_offset: Option<FixedOffset>,
    pub fixed_now: Option<FixedClock>,
    pub style: DateStyle,
    pub days: f64,
    pub json: bool,
    pub template_input: Option<String>,
    pub template_output: Option<String>,
}

impl DateSettings {
    /// `primary` 有指定的值優先，其次才用 `fallback`
    pub fn resolve(
        primary: &dyn ConfigProvider,
        fallback: Option<&dyn ConfigProvider>,
    ) -> Result<Self> {
        let utc_offset = pick(primary, fallback, |c| c.utc_offset())
            .map(parse_utc_offset)
            .transpose()?;

        let fixed_now = pick(primary, fallback, |c| c.fixed_now())
            .map(FixedClock::parse)
            .transpose()?
            .map(|clock| match utc_offset {
                Some(offset) => clock.with_offset(offset),
                None => clock,
            });

        let days = pick(primary, fallback, |c| c.days()).unwrap_or(0.0);
        validation::validate_finite("days", days)?;

        Ok(Self {
            utc_offset,
            fixed_now,
            style: pick(primary, fallback, |c| c.style()).unwrap_or_default(),
            days,
            json: pick(primary, fallback, |c| c.json_output()).unwrap_or(false),
            template_input: pick(primary, fallback, |c| c.template_input()).map(str::to_string),
            template_output: pick(primary, fallback, |c| c.template_output())
                .map(str::to_string),
        })
    }

    pub fn clock(&self) -> ConfiguredClock {
        match self.fixed_now {
            Some(fixed) => ConfiguredClock::Fixed(fixed),
            None => ConfiguredClock::System(SystemClock::new(self.utc_offset)),
        }
    }

    /// 讀一次時鐘並平移 `days`；模板裡的偏移再疊加在這個基準上
    pub fn base_instant(&self) -> Result<DateTime<FixedOffset>> {
        add_days_to_date(&self.clock().now(), self.days)
    }

    /// 固定在基準時間的模板渲染器
    pub fn template(&self) -> Result<DateTemplate<FixedClock>> {
        DateTemplate::new(FixedClock::new(self.base_instant()?))
    }

    /// 單一日期輸出：`json` 時輸出完整快照，否則依 `style` 格式化
    pub fn render_date(&self) -> Result<String> {
        let base = self.base_instant()?;

        if self.json {
            Ok(serde_json::to_string_pretty(&DateSnapshot::of(&base))?)
        } else {
            Ok(self.style.format(&base))
        }
    }
}

fn pick<'a, T>(
    primary: &'a dyn ConfigProvider,
    fallback: Option<&'a dyn ConfigProvider>,
    get: impl Fn(&'a dyn ConfigProvider) -> Option<T>,
) -> Option<T> {
    get(primary).or_else(|| fallback.and_then(&get))
}
