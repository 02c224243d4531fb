//! 时间类型模块
//!
//! `Timestamp` 是可序列化的毫秒时间戳，用于传输和存储。
//! "当前时间" 由前端通过 `js_sys::Date` 注入，本 crate 保持宿主可编译、
//! 可直接用 `#[test]` 测试。

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 格式化为 `YYYY-MM-DD`（UTC）
    ///
    /// 超出 chrono 可表示范围的值退化为空字符串，调用方按 "未知日期" 展示。
    pub fn to_ymd(&self) -> String {
        DateTime::from_timestamp_millis(self.0)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// 格式化为 `Aug 29, 2026` 形式的展示日期（UTC）
    pub fn to_display_date(&self) -> String {
        DateTime::from_timestamp_millis(self.0)
            .map(|dt| dt.format("%b %-d, %Y").to_string())
            .unwrap_or_default()
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_millis_as_ymd() {
        // 2026-08-29 00:00:00 UTC
        let ts = Timestamp::from_millis(1_787_961_600_000);
        assert_eq!(ts.to_ymd(), "2026-08-29");
    }

    #[test]
    fn display_date_has_no_leading_zero_day() {
        // 2008-11-28 00:00:00 UTC
        let ts = Timestamp::from_millis(1_227_830_400_000);
        assert_eq!(ts.to_display_date(), "Nov 28, 2008");
    }

    #[test]
    fn serializes_transparently() {
        let ts = Timestamp::from_millis(42);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "42");
        let back: Timestamp = serde_json::from_str("42").unwrap();
        assert_eq!(back, ts);
    }
}
