//! 编译模块：将内置规则表编译为可执行的匹配器
pub mod pattern;
pub mod compiler;

pub use self::pattern::{
    AxisRule, BrowserRule, DeviceRule, FormFactorSignatures, Matcher, PatternKind, RuleTable,
};
pub use self::compiler::RuleCompiler;
