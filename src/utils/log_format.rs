use std::fmt::{self, Write};

/// 日志用的 UA 预览：去掉首部空白、连续空白折叠为一个空格，超长截断并附原始长度
/// 仅在 Display 时遍历输入，不分配
#[inline]
pub fn preview_compact(user_agent: &str, max_chars: usize) -> UaPreview<'_> {
    UaPreview {
        user_agent: user_agent.trim_start(),
        max_chars,
    }
}

/// [`preview_compact`] 的返回值
#[derive(Debug, Clone, Copy)]
pub struct UaPreview<'a> {
    user_agent: &'a str,
    max_chars: usize,
}

impl fmt::Display for UaPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.user_agent.is_empty() {
            return f.write_str("<empty>");
        }

        let mut written = 0;
        let mut pending_space = false;

        for ch in self.user_agent.chars() {
            if ch.is_whitespace() {
                pending_space = written > 0;
                continue;
            }
            if written >= self.max_chars {
                return write!(f, "… ({} bytes)", self.user_agent.len());
            }
            if pending_space {
                f.write_char(' ')?;
                written += 1;
                pending_space = false;
                if written >= self.max_chars {
                    return write!(f, "… ({} bytes)", self.user_agent.len());
                }
            }
            f.write_char(ch)?;
            written += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_collapses_whitespace() {
        let out = preview_compact("  Mozilla/5.0   (X11;\t Linux)  ", 64).to_string();
        assert_eq!(out, "Mozilla/5.0 (X11; Linux)");
    }

    #[test]
    fn test_preview_truncates_long_input() {
        let long = "A".repeat(10_000);
        let out = preview_compact(&long, 8).to_string();
        assert_eq!(out, "AAAAAAAA… (10000 bytes)");
    }

    #[test]
    fn test_preview_exact_length_not_truncated() {
        assert_eq!(preview_compact("Opera/9.80", 10).to_string(), "Opera/9.80");
    }

    #[test]
    fn test_preview_marks_empty_input() {
        assert_eq!(preview_compact("", 16).to_string(), "<empty>");
        assert_eq!(preview_compact(" \t ", 16).to_string(), "<empty>");
    }
}
