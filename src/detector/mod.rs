//! 分类模块：UA 分类核心逻辑
pub mod global;
pub mod detector;
pub mod evaluator;

// 导出核心接口
pub use self::global::{global_classifier, init_global_classifier, parse};
pub use self::detector::UaClassifier;
pub use self::evaluator::Validity;
