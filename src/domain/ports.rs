use chrono::{DateTime, FixedOffset};

use crate::domain::model::DateStyle;

/// 提供「現在」的來源，讓模板渲染可以被固定在某個時間點
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// 設定來源（命令列、TOML 檔）共用的查詢介面；None 代表該來源沒有指定
pub trait ConfigProvider {
    fn utc_offset(&self) -> Option<&str>;
    fn fixed_now(&self) -> Option<&str>;
    fn style(&self) -> Option<DateStyle>;
    fn days(&self) -> Option<f64>;
    fn json_output(&self) -> Option<bool>;
    fn template_input(&self) -> Option<&str>;
    fn template_output(&self) -> Option<&str>;
}
