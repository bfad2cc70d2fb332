//! 结果模块：分类结果值对象
pub mod user_agent;

pub use self::user_agent::UserAgent;
