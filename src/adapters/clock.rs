use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::domain::ports::Clock;
use crate::utils::error::{DateError, Result};

/// 系統時鐘；設定 offset 時以該偏移呈現同一個瞬間
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    offset: Option<FixedOffset>,
}

impl SystemClock {
    pub fn new(offset: Option<FixedOffset>) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset),
            None => Local::now().fixed_offset(),
        }
    }
}

/// 固定在某個瞬間的時鐘，讓 mock 回應可重現
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<FixedOffset>);

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self(instant)
    }

    /// 從 RFC 3339 字串建立，例如 `2017-07-29T16:01:02+12:00`
    pub fn parse(value: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(value.trim())
            .map(Self)
            .map_err(|e| DateError::InvalidTimestamp {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    /// 保留同一瞬間，改用另一個偏移呈現
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self(self.0.with_timezone(&offset))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// 依設定決定的時鐘
#[derive(Debug, Clone, Copy)]
pub enum ConfiguredClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for ConfiguredClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self {
            ConfiguredClock::System(clock) => clock.now(),
            ConfiguredClock::Fixed(clock) => clock.now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::formatter::formatted_date_long;

    #[test]
    fn test_fixed_clock_parse() {
        let clock = FixedClock::parse("2017-07-29T16:01:02+12:00").unwrap();
        assert_eq!(formatted_date_long(&clock.now()), "2017-07-29T16:01:02+12:00");
        assert_eq!(clock.now(), clock.now());

        assert!(FixedClock::parse("29/07/2017").is_err());
    }

    #[test]
    fn test_fixed_clock_with_offset() {
        let clock = FixedClock::parse("2017-07-29T16:01:02+12:00")
            .unwrap()
            .with_offset(FixedOffset::east_opt(0).unwrap());
        assert_eq!(formatted_date_long(&clock.now()), "2017-07-29T04:01:02+00:00");
    }

    #[test]
    fn test_system_clock_uses_configured_offset() {
        let offset = FixedOffset::east_opt(5 * 3600 + 45 * 60).unwrap();
        let now = SystemClock::new(Some(offset)).now();
        assert_eq!(now.offset().local_minus_utc(), offset.local_minus_utc());
        assert!(formatted_date_long(&now).ends_with("+05:45"));
    }
}
