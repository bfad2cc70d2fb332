//! UA classification demonstration for rsuseragent
//! rsuseragent UA 分类演示程序
//! 功能说明：
//! 1. 演示全局分类器的显式初始化
//! 2. 展示浏览器 / 设备OS / 设备形态三个维度的分类结果与爬虫判定
//! 3. 输出结构化JSON结果
//!
//! 运行命令：
//! cargo run --example classify_demo

use env_logger::{Builder, Env, Target};
use rsuseragent::{ClassifierConfig, init_global_classifier, parse};
use serde_json::to_string_pretty;
use std::error::Error;

const SAMPLES: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (iPad; CPU OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 13; SM-S918B) AppleWebKit/537.36 (KHTML, like Gecko) SamsungBrowser/23.0 Chrome/115.0.0.0 Mobile Safari/537.36",
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
    "Mozilla/5.0 (compatible; MyCrawler/1.0)",
    "",
];

fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Stdout)
        .init();

    // ========== 2. 启动期初始化（规则表缺陷在此暴露） ==========
    init_global_classifier(ClassifierConfig::default())?;

    // ========== 3. 逐条分类并输出 ==========
    for sample in SAMPLES {
        let ua = parse(sample);
        println!("{} | bot: {}", ua, ua.is_bot(true));
        println!("{}", to_string_pretty(&ua)?);
    }

    Ok(())
}
