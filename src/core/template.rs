use chrono::{DateTime, FixedOffset};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

use crate::core::formatter::add_days_to_date;
use crate::domain::model::DateStyle;
use crate::domain::ports::Clock;
use crate::utils::error::{DateError, Result};

// {{date.short}}、{{date.long}}、{{date.short:-1}}、{{ date.long : +0.5 }}
const PLACEHOLDER_PATTERN: &str =
    r"\{\{\s*date\.(short|long)(?:\s*:\s*([+-]?\d+(?:\.\d+)?))?\s*\}\}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub body: String,
    pub replacements: usize,
}

/// 把 mock 回應內容裡的日期佔位符展開成實際日期
pub struct DateTemplate<C: Clock> {
    clock: C,
    pattern: Regex,
}

impl<C: Clock> DateTemplate<C> {
    pub fn new(clock: C) -> Result<Self> {
        Ok(Self {
            clock,
            pattern: Regex::new(PLACEHOLDER_PATTERN)?,
        })
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// 同一次渲染只讀一次時鐘，所有佔位符基準一致；不認得的佔位符原樣保留
    pub fn render(&self, body: &str) -> Result<Rendered> {
        let now = self.clock.now();
        let mut replacements = 0;
        let mut failure: Option<DateError> = None;

        let rendered = self.pattern.replace_all(body, |caps: &Captures| {
            match expand_placeholder(&now, caps) {
                Ok(value) => {
                    replacements += 1;
                    value
                }
                Err(e) => {
                    if failure.is_none() {
                        failure = Some(e);
                    }
                    caps[0].to_string()
                }
            }
        });

        if let Some(e) = failure {
            return Err(e);
        }

        tracing::debug!(
            "Rendered {} date placeholder(s) relative to {}",
            replacements,
            now.to_rfc3339()
        );

        Ok(Rendered {
            body: rendered.into_owned(),
            replacements,
        })
    }

    /// 讀取模板檔、渲染後寫到輸出路徑（必要時建立上層目錄）
    pub fn render_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<usize> {
        let body = fs::read_to_string(&input)?;
        let rendered = self.render(&body)?;

        if let Some(parent) = output.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&output, rendered.body)?;
        tracing::info!(
            "📝 Rendered {} -> {} ({} replacement(s))",
            input.as_ref().display(),
            output.as_ref().display(),
            rendered.replacements
        );

        Ok(rendered.replacements)
    }
}

fn expand_placeholder(now: &DateTime<FixedOffset>, caps: &Captures) -> Result<String> {
    let style: DateStyle = caps[1].parse()?;

    let days = match caps.get(2) {
        Some(m) => m
            .as_str()
            .parse::<f64>()
            .map_err(|_| DateError::InvalidConfigValueError {
                field: "template".to_string(),
                value: m.as_str().to_string(),
                reason: "Day offset is not a number".to_string(),
            })?,
        None => 0.0,
    };

    let date = add_days_to_date(now, days)?;
    Ok(style.format(&date))
}
