//! 分类结果
//! 每次 parse 生成一个不可变值，所有字段在构造时一次性算好，访问器不做任何重复计算

use std::fmt;
use serde::Serialize;

use crate::detector::evaluator::Validity;
use crate::rule::{FormFactor, os};

/// UA 分类结果
/// 标签字段要么属于对应维度的已知标签集合，要么是 "unknown"，不会为空
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAgent {
    user_agent: String,
    form_factor: FormFactor,
    browser: &'static str,
    device: &'static str,
    operating_system: &'static str,
    #[serde(flatten)]
    validity: Validity,
}

impl UserAgent {
    pub(crate) fn new(
        user_agent: String,
        form_factor: FormFactor,
        browser: &'static str,
        device: &'static str,
        operating_system: &'static str,
        validity: Validity,
    ) -> Self {
        Self {
            user_agent,
            form_factor,
            browser,
            device,
            operating_system,
            validity,
        }
    }

    /// 原始输入（逐字节原样保留）
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn form_factor(&self) -> FormFactor {
        self.form_factor
    }

    /// "desktop" | "mobile" | "tablet"
    pub fn device_type(&self) -> &'static str {
        self.form_factor.as_str()
    }

    pub fn browser(&self) -> &'static str {
        self.browser
    }

    pub fn device(&self) -> &'static str {
        self.device
    }

    pub fn operating_system(&self) -> &'static str {
        self.operating_system
    }

    /// 爬虫判定；include_browser=false 时忽略浏览器维度（浏览器未识别的噪声更大）
    pub fn is_bot(&self, include_browser: bool) -> bool {
        self.validity.is_bot(include_browser)
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    pub fn is_browser_valid(&self) -> bool {
        self.validity.browser_valid
    }

    pub fn is_operating_system_valid(&self) -> bool {
        self.validity.operating_system_valid
    }

    pub fn is_device_valid(&self) -> bool {
        self.validity.device_valid
    }

    pub fn is_mobile(&self) -> bool {
        self.form_factor == FormFactor::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.form_factor == FormFactor::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.form_factor == FormFactor::Desktop
    }

    // OS 族判断：与 operating_system 标签做字符串比较
    pub fn is_windows(&self) -> bool {
        self.operating_system == os::WINDOWS
    }

    pub fn is_linux(&self) -> bool {
        self.operating_system == os::LINUX
    }

    pub fn is_macos(&self) -> bool {
        self.operating_system == os::MACOS
    }

    pub fn is_android(&self) -> bool {
        self.operating_system == os::ANDROID
    }

    pub fn is_ios(&self) -> bool {
        self.operating_system == os::IOS
    }

    pub fn is_chromeos(&self) -> bool {
        self.operating_system == os::CHROMEOS
    }

    pub fn is_ubuntu(&self) -> bool {
        self.operating_system == os::UBUNTU
    }

    pub fn is_suse(&self) -> bool {
        self.operating_system == os::SUSE
    }

    pub fn is_redhat(&self) -> bool {
        self.operating_system == os::REDHAT
    }

    pub fn is_fedora(&self) -> bool {
        self.operating_system == os::FEDORA
    }

    pub fn is_centos(&self) -> bool {
        self.operating_system == os::CENTOS
    }

    pub fn is_qnx(&self) -> bool {
        self.operating_system == os::QNX
    }

    pub fn is_beos(&self) -> bool {
        self.operating_system == os::BEOS
    }

    pub fn is_os2(&self) -> bool {
        self.operating_system == os::OS2
    }
}

// ======== 为 UserAgent 实现 Display trait（用于 CLI / 日志输出） ========
impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} ({})", self.browser, self.device, self.form_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::UNKNOWN;

    fn sample(os_label: &'static str, form_factor: FormFactor) -> UserAgent {
        let validity = Validity::evaluate("Chrome", false, "Linux", os_label);
        UserAgent::new("ua".to_string(), form_factor, "Chrome", "Linux", os_label, validity)
    }

    #[test]
    fn test_os_predicates_use_label_equality() {
        let ua = sample(os::LINUX, FormFactor::Desktop);
        assert!(ua.is_linux());
        assert!(!ua.is_ubuntu());
        assert!(!ua.is_windows());
        assert!(sample(os::CHROMEOS, FormFactor::Desktop).is_chromeos());
        assert!(sample(os::OS2, FormFactor::Desktop).is_os2());
    }

    #[test]
    fn test_form_factor_predicates_are_exclusive() {
        for ff in [FormFactor::Desktop, FormFactor::Mobile, FormFactor::Tablet] {
            let ua = sample(os::LINUX, ff);
            let hits = [ua.is_desktop(), ua.is_mobile(), ua.is_tablet()]
                .iter()
                .filter(|b| **b)
                .count();
            assert_eq!(hits, 1);
            assert_eq!(ua.device_type(), ff.as_str());
        }
    }

    #[test]
    fn test_display() {
        let ua = sample(os::LINUX, FormFactor::Mobile);
        assert_eq!(ua.to_string(), "Chrome on Linux (mobile)");
    }

    #[test]
    fn test_serialize_json_fields() {
        let ua = sample(UNKNOWN, FormFactor::Tablet);
        let value = serde_json::to_value(&ua).unwrap();
        assert_eq!(value["user_agent"], "ua");
        assert_eq!(value["form_factor"], "tablet");
        assert_eq!(value["operating_system"], "unknown");
        assert_eq!(value["operating_system_valid"], false);
        assert_eq!(value["browser_valid"], true);
    }
}
