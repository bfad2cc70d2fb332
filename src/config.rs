//! 全局配置管理,存储分类器可配置项

/// 分类器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    // is_bot 判定是否纳入浏览器维度
    pub include_browser: bool,
    // 日志中UA预览的最大字符数
    pub log_preview_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            include_browser: true,
            log_preview_len: 96,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> ClassifierConfig {
        ClassifierConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: ClassifierConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_browser(mut self, include: bool) -> Self {
        self.config.include_browser = include;
        self
    }

    pub fn log_preview_len(mut self, len: usize) -> Self {
        self.config.log_preview_len = len;
        self
    }

    pub fn build(self) -> ClassifierConfig {
        self.config
    }
}
