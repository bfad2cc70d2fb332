//! rsuseragent - 基于有序规则表的 User-Agent 分类库
//!
//! 从 UA 字符串中识别浏览器、设备/操作系统、设备形态（desktop/mobile/tablet），
//! 并据此推导爬虫判定。规则表为编译期固定数据，进程内只编译一次，之后只读共享。
//!
//! ```
//! let ua = rsuseragent::parse("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)");
//! assert_eq!(ua.browser(), "[Bot] Googlebot");
//! assert!(ua.is_bot(true));
//! ```

// 导出全局错误类型
pub use self::error::{UaError, UaResult};

// 导出配置模块
pub use self::config::{ClassifierConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{BrowserRuleSpec, DeviceRuleSpec, FormFactor, UNKNOWN, os};

// 导出编译模块核心接口
pub use self::compiler::{Matcher, PatternKind, RuleCompiler, RuleTable};

// 导出结果类型
pub use self::result::UserAgent;

// 导出分类模块核心接口
pub use self::detector::{UaClassifier, global_classifier, init_global_classifier, parse};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod compiler;
pub mod result;
pub mod detector;
pub mod utils;
