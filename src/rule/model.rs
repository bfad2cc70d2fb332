//! 规则数据模型定义
//! 仅存储未编译的规则数据，无任何匹配逻辑

/// 未命中任何规则时的哨兵标签
pub const UNKNOWN: &str = "unknown";

/// 自动化客户端（爬虫）标签前缀
pub const BOT_LABEL_PREFIX: &str = "[Bot] ";

/// 操作系统族标识
pub mod os {
    pub const WINDOWS: &str = "windows";
    pub const LINUX: &str = "linux";
    pub const ANDROID: &str = "android";
    pub const CHROMEOS: &str = "chromeos";
    pub const UBUNTU: &str = "ubuntu";
    pub const SUSE: &str = "suse";
    pub const REDHAT: &str = "redhat";
    pub const FEDORA: &str = "fedora";
    pub const CENTOS: &str = "centos";
    pub const MACOS: &str = "macos";
    pub const QNX: &str = "qnx";
    pub const BEOS: &str = "beos";
    pub const OS2: &str = "os2";
    pub const IOS: &str = "ios";
    /// 爬虫设备特征对应的哨兵OS
    pub const BOT: &str = "bot";
}

/// 浏览器维度规则（编译前）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserRuleSpec {
    pub label: &'static str,
    /// 大小写不敏感的正则/字面量模式
    pub pattern: &'static str,
    /// 是否为自动化客户端
    pub automated: bool,
}

impl BrowserRuleSpec {
    pub const fn browser(label: &'static str, pattern: &'static str) -> Self {
        Self { label, pattern, automated: false }
    }

    pub const fn bot(label: &'static str, pattern: &'static str) -> Self {
        Self { label, pattern, automated: true }
    }
}

/// 设备/OS维度规则（编译前）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRuleSpec {
    pub label: &'static str,
    pub pattern: &'static str,
    pub operating_system: &'static str,
}

impl DeviceRuleSpec {
    pub const fn new(label: &'static str, pattern: &'static str, operating_system: &'static str) -> Self {
        Self { label, pattern, operating_system }
    }
}
