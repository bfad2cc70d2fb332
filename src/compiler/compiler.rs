//! 规则编译器核心
//! 仅负责将内置规则表编译为可执行的匹配器，构建期发现的任何缺陷都直接返回错误

use std::time::Instant;
use regex::RegexBuilder;
use rustc_hash::FxHashSet;

use super::pattern::{BrowserRule, DeviceRule, FormFactorSignatures, Matcher, PatternKind, RuleTable};
use crate::error::{UaError, UaResult};
use crate::rule::{BrowserRuleSpec, DeviceRuleSpec};

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译浏览器规则表（保持声明顺序）
    pub fn compile_browser_table(specs: &[BrowserRuleSpec]) -> UaResult<RuleTable<BrowserRule>> {
        let start = Instant::now();
        let mut stats = CompileStats::default();
        let mut seen = FxHashSet::default();
        let mut rules = Vec::with_capacity(specs.len());

        for spec in specs {
            Self::check_label(spec.label, &mut seen)?;
            let matcher = Self::compile_matcher(spec.pattern)?;
            stats.record(&matcher);
            rules.push(BrowserRule {
                label: spec.label,
                matcher,
                automated: spec.automated,
            });
        }

        log::debug!(
            "Browser table compiled | rules: {} | {} | time: {:?}",
            rules.len(),
            stats,
            start.elapsed()
        );
        Ok(RuleTable::new(rules))
    }

    /// 编译设备/OS规则表（保持声明顺序）
    pub fn compile_device_table(specs: &[DeviceRuleSpec]) -> UaResult<RuleTable<DeviceRule>> {
        let start = Instant::now();
        let mut stats = CompileStats::default();
        let mut seen = FxHashSet::default();
        let mut rules = Vec::with_capacity(specs.len());

        for spec in specs {
            Self::check_label(spec.label, &mut seen)?;
            let matcher = Self::compile_matcher(spec.pattern)?;
            stats.record(&matcher);
            rules.push(DeviceRule {
                label: spec.label,
                matcher,
                operating_system: spec.operating_system,
            });
        }

        log::debug!(
            "Device table compiled | rules: {} | {} | time: {:?}",
            rules.len(),
            stats,
            start.elapsed()
        );
        Ok(RuleTable::new(rules))
    }

    /// 编译设备形态的两条特征
    pub fn compile_form_factor(tablet: &str, mobile: &str) -> UaResult<FormFactorSignatures> {
        Ok(FormFactorSignatures {
            tablet: Self::compile_matcher(tablet)?,
            mobile: Self::compile_matcher(mobile)?,
        })
    }

    /// 单条模式编译
    /// 所有模式统一编译为忽略大小写的正则；形态（字面量 / 字面量OR分支 / 正则）仅用于统计
    pub fn compile_matcher(pattern: &str) -> UaResult<Matcher> {
        if pattern.is_empty() {
            return Err(UaError::EmptyPattern(pattern.to_string()));
        }

        // 空分支（如 "a||b"）会匹配任意输入，视为缺陷
        let branches: Vec<&str> = pattern.split('|').collect();
        if branches.iter().any(|b| b.is_empty()) {
            return Err(UaError::EmptyPattern(pattern.to_string()));
        }

        let kind = if is_plain_literal(pattern) {
            PatternKind::Literal
        } else if branches.len() > 1 && branches.iter().all(|b| is_plain_literal(b)) {
            PatternKind::LiteralAny
        } else {
            PatternKind::Regex
        };

        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        let matcher = Matcher::new(regex, kind);
        log::trace!("Pattern compiled | {}", matcher.describe());
        Ok(matcher)
    }

    fn check_label(label: &'static str, seen: &mut FxHashSet<&'static str>) -> UaResult<()> {
        if label.is_empty() {
            return Err(UaError::EmptyLabel);
        }
        if !seen.insert(label) {
            return Err(UaError::DuplicateLabel(label.to_string()));
        }
        Ok(())
    }
}

/// 不含任何正则元字符的串
#[inline]
fn is_plain_literal(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(regex_syntax::is_meta_character)
}

/// 编译统计信息
#[derive(Debug, Default)]
struct CompileStats {
    literal: usize,
    literal_any: usize,
    regex: usize,
}

impl CompileStats {
    fn record(&mut self, matcher: &Matcher) {
        match matcher.kind() {
            PatternKind::Literal => self.literal += 1,
            PatternKind::LiteralAny => self.literal_any += 1,
            PatternKind::Regex => self.regex += 1,
        }
    }
}

impl std::fmt::Display for CompileStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "literal: {} | literal_any: {} | regex: {}",
            self.literal, self.literal_any, self.regex
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{BROWSER_RULES, DEVICE_RULES, MOBILE_PATTERN, TABLET_PATTERN};

    #[test]
    fn test_builtin_tables_compile() {
        let browsers = RuleCompiler::compile_browser_table(BROWSER_RULES).unwrap();
        assert_eq!(browsers.len(), BROWSER_RULES.len());
        let devices = RuleCompiler::compile_device_table(DEVICE_RULES).unwrap();
        assert_eq!(devices.len(), DEVICE_RULES.len());
        RuleCompiler::compile_form_factor(TABLET_PATTERN, MOBILE_PATTERN).unwrap();
    }

    #[test]
    fn test_compiled_table_preserves_declaration_order() {
        let browsers = RuleCompiler::compile_browser_table(BROWSER_RULES).unwrap();
        let compiled: Vec<_> = browsers.labels().collect();
        let declared: Vec<_> = BROWSER_RULES.iter().map(|r| r.label).collect();
        assert_eq!(compiled, declared);
    }

    #[test]
    fn test_literal_pattern_kind() {
        let matcher = RuleCompiler::compile_matcher("SamsungBrowser").unwrap();
        assert_eq!(matcher.kind(), PatternKind::Literal);
        assert!(matcher.is_match("Mozilla SAMSUNGBROWSER/23.0"));
    }

    #[test]
    fn test_literal_alternation_kind() {
        let matcher = RuleCompiler::compile_matcher("opera|opr/").unwrap();
        assert_eq!(matcher.kind(), PatternKind::LiteralAny);
        assert!(matcher.is_match("Chrome/120 OPR/106.0"));
        assert!(!matcher.is_match("Chrome/120 OPRGX/106.0"));
    }

    #[test]
    fn test_meta_pattern_kind() {
        let matcher = RuleCompiler::compile_matcher(r"windows nt 6\.1").unwrap();
        assert_eq!(matcher.kind(), PatternKind::Regex);
        assert!(matcher.is_match("Mozilla/5.0 (WINDOWS NT 6.1; Win64)"));
        assert!(!matcher.is_match("Mozilla/5.0 (Windows NT 6x1)"));
    }

    #[test]
    fn test_non_ascii_case_variant_folds_same_for_literal_and_regex() {
        // U+017F（长 s）在 Unicode 简单大小写折叠下等价于 's'
        let literal = RuleCompiler::compile_matcher("windows 98").unwrap();
        let regex = RuleCompiler::compile_matcher(r"windows nt 6\.1").unwrap();
        assert_eq!(literal.kind(), PatternKind::Literal);
        assert_eq!(regex.kind(), PatternKind::Regex);

        assert!(literal.is_match("Mozilla/4.0 (compatible; MSIE 5.0; Window\u{17F} 98)"));
        assert!(regex.is_match("Mozilla/5.0 (Window\u{17F} NT 6.1; Win64)"));
    }

    #[test]
    fn test_describe_names_kind_and_pattern() {
        let matcher = RuleCompiler::compile_matcher("opera|opr/").unwrap();
        assert_eq!(matcher.describe(), "literal_any: opera|opr/");
    }

    #[test]
    fn test_malformed_pattern_is_rejected() {
        let err = RuleCompiler::compile_matcher("(unclosed").unwrap_err();
        assert!(matches!(err, UaError::RegexCompileError(_)));
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        assert!(matches!(
            RuleCompiler::compile_matcher("").unwrap_err(),
            UaError::EmptyPattern(_)
        ));
        assert!(matches!(
            RuleCompiler::compile_matcher("bot||crawler").unwrap_err(),
            UaError::EmptyPattern(_)
        ));
    }

    #[test]
    fn test_duplicate_label_is_rejected() {
        let specs = [
            BrowserRuleSpec::browser("Chrome", "chrome"),
            BrowserRuleSpec::browser("Chrome", "crios"),
        ];
        let err = RuleCompiler::compile_browser_table(&specs).unwrap_err();
        assert!(matches!(err, UaError::DuplicateLabel(label) if label == "Chrome"));
    }

    #[test]
    fn test_empty_label_is_rejected() {
        let specs = [DeviceRuleSpec::new("", "linux", "linux")];
        let err = RuleCompiler::compile_device_table(&specs).unwrap_err();
        assert!(matches!(err, UaError::EmptyLabel));
    }

    #[test]
    fn test_first_match_wins() {
        let specs = [
            BrowserRuleSpec::browser("Brave", "brave"),
            BrowserRuleSpec::browser("Chrome", "chrome"),
        ];
        let table = RuleCompiler::compile_browser_table(&specs).unwrap();
        assert_eq!(
            table.first_match("Brave Chrome/120.0.0.0").map(|r| r.label),
            Some("Brave")
        );
        assert!(table.first_match("Firefox/121.0").is_none());
    }
}
