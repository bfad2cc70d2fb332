//! UA classifier core module
//! UA 分类器核心
//! 核心职责：
//! 1. 构建期编译三条维度的规则（浏览器 / 设备OS / 设备形态）
//! 2. 每个维度独立按顺序扫描，首个命中即返回
//! 3. 汇总三个维度结果，推导有效性与爬虫判定

use crate::compiler::{BrowserRule, DeviceRule, FormFactorSignatures, RuleCompiler, RuleTable};
use crate::config::ClassifierConfig;
use crate::detector::evaluator::Validity;
use crate::error::UaResult;
use crate::result::UserAgent;
use crate::rule::{BROWSER_RULES, DEVICE_RULES, FormFactor, MOBILE_PATTERN, TABLET_PATTERN, UNKNOWN};
use crate::utils::preview_compact;

/// UA 分类器
/// 规则表在构造时一次性编译，之后只读，可在任意线程间共享
#[derive(Debug, Clone)]
pub struct UaClassifier {
    browsers: RuleTable<BrowserRule>,
    devices: RuleTable<DeviceRule>,
    form_factor: FormFactorSignatures,
    config: ClassifierConfig,
}

impl UaClassifier {
    /// 使用内置规则表创建分类器
    /// 规则表缺陷（非法正则/空模式/重复标签）在此处返回错误，不会延迟到分类时
    pub fn new(config: ClassifierConfig) -> UaResult<Self> {
        let browsers = RuleCompiler::compile_browser_table(BROWSER_RULES)?;
        let devices = RuleCompiler::compile_device_table(DEVICE_RULES)?;
        let form_factor = RuleCompiler::compile_form_factor(TABLET_PATTERN, MOBILE_PATTERN)?;

        log::debug!(
            "UaClassifier built | browser rules: {} | device rules: {}",
            browsers.len(),
            devices.len()
        );

        Ok(Self {
            browsers,
            devices,
            form_factor,
            config,
        })
    }

    /// 分类单个 UA，任何输入（含空串、超长串）都返回完整结果
    pub fn classify(&self, user_agent: &str) -> UserAgent {
        let (browser, automated) = self.classify_browser(user_agent);
        let (device, operating_system) = self.classify_device(user_agent);
        let form_factor = self.classify_form_factor(user_agent);
        let validity = Validity::evaluate(browser, automated, device, operating_system);

        log::trace!(
            "Classified UA [{}] -> browser: {} | device: {} | os: {} | form factor: {}",
            preview_compact(user_agent, self.config.log_preview_len),
            browser,
            device,
            operating_system,
            form_factor
        );

        UserAgent::new(
            user_agent.to_string(),
            form_factor,
            browser,
            device,
            operating_system,
            validity,
        )
    }

    /// 按分类器配置的浏览器策略做爬虫判定
    pub fn is_bot(&self, user_agent: &UserAgent) -> bool {
        user_agent.is_bot(self.config.include_browser)
    }

    /// 浏览器维度：返回 (标签, 是否自动化客户端)
    fn classify_browser(&self, input: &str) -> (&'static str, bool) {
        self.browsers
            .first_match(input)
            .map_or((UNKNOWN, false), |rule| (rule.label, rule.automated))
    }

    /// 设备/OS维度：返回 (设备标签, OS标签)
    fn classify_device(&self, input: &str) -> (&'static str, &'static str) {
        self.devices
            .first_match(input)
            .map_or((UNKNOWN, UNKNOWN), |rule| (rule.label, rule.operating_system))
    }

    /// 设备形态：先平板，再手机，否则桌面
    fn classify_form_factor(&self, input: &str) -> FormFactor {
        if self.form_factor.tablet.is_match(input) {
            FormFactor::Tablet
        } else if self.form_factor.mobile.is_match(input) {
            FormFactor::Mobile
        } else {
            FormFactor::Desktop
        }
    }

    /// 按优先级顺序列出浏览器标签
    pub fn browser_labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.browsers.labels()
    }

    /// 按优先级顺序列出设备标签
    pub fn device_labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.devices.labels()
    }

    /// 构建时生效的配置
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}
