use chrono::{DateTime, Offset, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::formatter::{formatted_date_long, formatted_date_short};
use crate::utils::error::DateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// YYYY-MM-DD
    Short,
    /// YYYY-MM-DDTHH:MM:SS±hh:mm
    #[default]
    Long,
}

impl DateStyle {
    pub fn format<Tz: TimeZone>(self, date: &DateTime<Tz>) -> String {
        match self {
            DateStyle::Short => formatted_date_short(date),
            DateStyle::Long => formatted_date_long(date),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DateStyle::Short => "short",
            DateStyle::Long => "long",
        }
    }
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateStyle {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(DateStyle::Short),
            "long" => Ok(DateStyle::Long),
            other => Err(DateError::InvalidConfigValueError {
                field: "style".to_string(),
                value: other.to_string(),
                reason: "Allowed values: short, long".to_string(),
            }),
        }
    }
}

/// 單一時間點的所有輸出格式，供 --json 使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSnapshot {
    pub short: String,
    pub long: String,
    pub epoch_millis: i64,
    pub utc_offset_minutes: i32,
}

impl DateSnapshot {
    pub fn of<Tz: TimeZone>(date: &DateTime<Tz>) -> Self {
        Self {
            short: formatted_date_short(date),
            long: formatted_date_long(date),
            epoch_millis: date.timestamp_millis(),
            utc_offset_minutes: date.offset().fix().local_minus_utc() / 60,
        }
    }
}
