//! 全局错误类型定义
//! 分类路径本身不产生运行时错误，这里只覆盖规则表构建期的缺陷

use thiserror::Error;
use regex::Error as RegexError;

#[derive(Error, Debug)]
pub enum UaError {
    // 规则相关错误
    #[error("Rule has an empty label")]
    EmptyLabel,
    #[error("Rule pattern is empty: {0}")]
    EmptyPattern(String),
    #[error("Duplicate rule label in table: {0}")]
    DuplicateLabel(String),

    // 编译相关错误
    #[error("Regex compilation failed: {0}")]
    RegexCompileError(#[from] RegexError),

    // 分类器相关错误
    #[error("Classifier initialization failed: {0}")]
    ClassifierInitError(String),
}

// 全局Result类型
pub type UaResult<T> = Result<T, UaError>;
