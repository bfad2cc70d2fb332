//! 全局分类器单例管理
//! 核心职责：
//! 1. 维护进程生命周期内唯一的 UaClassifier 实例（构建一次后冻结，只读共享）
//! 2. 提供启动期显式初始化接口，尽早暴露规则表缺陷
//! 3. 未显式初始化时首次使用按默认配置懒加载

use once_cell::sync::OnceCell;

use super::detector::UaClassifier;
use crate::config::ClassifierConfig;
use crate::error::{UaError, UaResult};
use crate::result::UserAgent;

/// 全局分类器实例 - 线程安全单例
static GLOBAL_CLASSIFIER: OnceCell<UaClassifier> = OnceCell::new();

/// 初始化全局分类器
/// 幂等：已初始化则直接返回 Ok(())，配置以第一次成功初始化（或首次懒加载）为准。
/// 实例构建后传入的配置会被忽略，与现有配置不同时记录 warn 日志；
/// 需要其他配置时请直接构造独立的 [`UaClassifier`]
pub fn init_global_classifier(config: ClassifierConfig) -> UaResult<()> {
    if let Some(existing) = GLOBAL_CLASSIFIER.get() {
        warn_if_config_ignored(existing, &config);
        return Ok(());
    }

    let classifier = UaClassifier::new(config).map_err(|e| {
        UaError::ClassifierInitError(format!("Failed to build UaClassifier: {}", e))
    })?;

    // 并发初始化时只有一个能写入，另一个的结果直接丢弃，语义上等价
    if let Err(classifier) = GLOBAL_CLASSIFIER.set(classifier) {
        log::debug!("Global classifier initialized concurrently by another thread");
        if let Some(existing) = GLOBAL_CLASSIFIER.get() {
            warn_if_config_ignored(existing, classifier.config());
        }
        return Ok(());
    }

    log::info!("Global UaClassifier initialized successfully");
    Ok(())
}

fn warn_if_config_ignored(existing: &UaClassifier, requested: &ClassifierConfig) {
    if existing.config() == requested {
        log::debug!("Global classifier already initialized, skip reinitialization");
    } else {
        log::warn!(
            "Global classifier already initialized, requested config ignored | active: {:?} | requested: {:?}",
            existing.config(),
            requested
        );
    }
}

/// 获取全局分类器（未初始化时使用默认配置懒加载）
/// 内置规则表存在缺陷属于编程错误，此处直接终止，不会带着坏表继续分类
pub fn global_classifier() -> &'static UaClassifier {
    GLOBAL_CLASSIFIER.get_or_init(|| {
        log::debug!("Lazy initializing global UaClassifier with default config");
        UaClassifier::new(ClassifierConfig::default()).unwrap_or_else(|e| {
            log::error!("Built-in rule tables are invalid: {}", e);
            panic!("内置规则表编译失败: {}", e);
        })
    })
}

/// 使用全局分类器分类单个 UA
pub fn parse(user_agent: &str) -> UserAgent {
    global_classifier().classify(user_agent)
}
