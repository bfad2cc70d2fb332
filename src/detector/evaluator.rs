//! 有效性 / 爬虫判定
//! 三个维度的结果各自独立推出一个有效标记，纯函数，无副作用

use serde::Serialize;

use crate::rule::{UNKNOWN, os};

/// 三个维度的有效标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Validity {
    pub browser_valid: bool,
    pub operating_system_valid: bool,
    pub device_valid: bool,
}

impl Validity {
    /// 由三个维度的分类结果推导有效标记
    pub fn evaluate(
        browser: &str,
        browser_automated: bool,
        device: &str,
        operating_system: &str,
    ) -> Self {
        Self {
            browser_valid: browser != UNKNOWN && !browser_automated,
            operating_system_valid: operating_system != UNKNOWN && operating_system != os::BOT,
            device_valid: device != UNKNOWN,
        }
    }

    /// 任一维度无效即判为爬虫；浏览器维度可选
    #[inline]
    pub fn is_bot(&self, include_browser: bool) -> bool {
        (include_browser && !self.browser_valid) || !self.operating_system_valid || !self.device_valid
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.browser_valid && self.operating_system_valid && self.device_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_recognized_is_valid() {
        let v = Validity::evaluate("Chrome", false, "Windows 10", os::WINDOWS);
        assert!(v.is_valid());
        assert!(!v.is_bot(true));
        assert!(!v.is_bot(false));
    }

    #[test]
    fn test_automated_browser_only_counts_when_included() {
        let v = Validity::evaluate("[Bot] Ahrefs", true, "Linux", os::LINUX);
        assert!(!v.browser_valid);
        assert!(v.is_bot(true));
        assert!(!v.is_bot(false));
        assert!(!v.is_valid());
    }

    #[test]
    fn test_unknown_browser_only_counts_when_included() {
        let v = Validity::evaluate(UNKNOWN, false, "Mac OS", os::MACOS);
        assert!(v.is_bot(true));
        assert!(!v.is_bot(false));
    }

    #[test]
    fn test_bot_operating_system_is_invalid() {
        let v = Validity::evaluate("Chrome", false, "Search Bot", os::BOT);
        assert!(v.device_valid);
        assert!(!v.operating_system_valid);
        assert!(v.is_bot(false));
    }

    #[test]
    fn test_unknown_device_is_bot() {
        let v = Validity::evaluate("Chrome", false, UNKNOWN, UNKNOWN);
        assert!(!v.device_valid);
        assert!(v.is_bot(false));
    }

    #[test]
    fn test_is_valid_complements_is_bot_with_browser() {
        let browsers = [("Chrome", false), ("[Bot] Other", true), (UNKNOWN, false)];
        let devices = [("Linux", os::LINUX), ("Search Bot", os::BOT), (UNKNOWN, UNKNOWN)];
        for (browser, automated) in browsers {
            for (device, operating_system) in devices {
                let v = Validity::evaluate(browser, automated, device, operating_system);
                assert_eq!(v.is_valid(), !v.is_bot(true));
            }
        }
    }
}
