//! 编译后模式模型
//! 规则表编译后的结构，构建完成后只读

use regex::Regex;

/// 模式形态（仅用于编译统计与调试输出，匹配语义完全一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// 纯字面量
    Literal,
    /// 纯字面量 OR 分支
    LiteralAny,
    /// 含正则元字符
    Regex,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Literal => "literal",
            PatternKind::LiteralAny => "literal_any",
            PatternKind::Regex => "regex",
        }
    }
}

/// 运行时匹配器，大小写不敏感、无锚定的子串语义
/// 所有模式统一走忽略大小写的正则（Unicode 简单大小写折叠），
/// 字面量模式由 regex 内部的字面量前置过滤加速，保证同一张表内折叠规则一致
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
    kind: PatternKind,
}

impl Matcher {
    pub(crate) fn new(regex: Regex, kind: PatternKind) -> Self {
        Self { regex, kind }
    }

    /// 简单匹配判断
    #[inline(always)]
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// 规则描述（用于日志/调试输出）
    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind.as_str(), self.regex.as_str())
    }
}

/// 单条规则表条目的公共视图，扫描逻辑只依赖这两项
pub trait AxisRule {
    fn label(&self) -> &'static str;
    fn matcher(&self) -> &Matcher;
}

/// 编译后的浏览器规则
#[derive(Debug, Clone)]
pub struct BrowserRule {
    pub label: &'static str,
    pub matcher: Matcher,
    pub automated: bool,
}

impl AxisRule for BrowserRule {
    fn label(&self) -> &'static str {
        self.label
    }

    fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

/// 编译后的设备/OS规则
#[derive(Debug, Clone)]
pub struct DeviceRule {
    pub label: &'static str,
    pub matcher: Matcher,
    pub operating_system: &'static str,
}

impl AxisRule for DeviceRule {
    fn label(&self) -> &'static str {
        self.label
    }

    fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

/// 有序规则表：优先级列表，首个命中即返回
/// 构建后冻结为切片，不提供任何修改入口
#[derive(Debug, Clone)]
pub struct RuleTable<R> {
    rules: Box<[R]>,
}

impl<R: AxisRule> RuleTable<R> {
    pub(crate) fn new(rules: Vec<R>) -> Self {
        Self {
            rules: rules.into_boxed_slice(),
        }
    }

    /// 按声明顺序扫描，返回第一条命中的规则
    #[inline]
    pub fn first_match(&self, input: &str) -> Option<&R> {
        self.rules.iter().find(|rule| rule.matcher().is_match(input))
    }

    /// 按优先级顺序列出所有标签
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.label())
    }

    pub(crate) fn len(&self) -> usize {
        self.rules.len()
    }
}

/// 编译后的设备形态特征
#[derive(Debug, Clone)]
pub struct FormFactorSignatures {
    pub tablet: Matcher,
    pub mobile: Matcher,
}
