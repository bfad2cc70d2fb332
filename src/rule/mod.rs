//! 规则模块：内置规则表数据与数据模型定义
pub mod model;
pub mod browser;
pub mod device;
pub mod form_factor;

// 导出核心接口
pub use self::model::{BrowserRuleSpec, DeviceRuleSpec, BOT_LABEL_PREFIX, UNKNOWN, os};
pub use self::browser::BROWSER_RULES;
pub use self::device::DEVICE_RULES;
pub use self::form_factor::{FormFactor, MOBILE_PATTERN, TABLET_PATTERN};
