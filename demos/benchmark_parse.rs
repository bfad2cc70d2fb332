// demos/benchmark_parse.rs
// rsuseragent UA 分类 基准性能测试
// 标准调用方式: 全局初始化 + parse 分类
// 运行命令: cargo run --example benchmark_parse --release
use rsuseragent::{ClassifierConfig, init_global_classifier, parse};
use std::hint::black_box;
use std::time::Instant;

/// 压测核心配置项
const BENCHMARK_TOTAL_CALL: u64 = 100_000; // 每个样本的压测次数
const BENCHMARK_WARM_UP_CALL: u64 = 1_000; // 预热调用次数

const SAMPLES: &[(&str, &str)] = &[
    (
        "desktop",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    ),
    ("bot", "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)"),
    (
        "mobile",
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1",
    ),
    ("unknown", ""),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // 1. 全局初始化，排除规则表编译对计时的影响
    init_global_classifier(ClassifierConfig::default())?;

    println!("rsuseragent 分类基准测试开始");
    println!(
        "测试配置: 预热次数 = {}, 每样本压测次数 = {}",
        BENCHMARK_WARM_UP_CALL, BENCHMARK_TOTAL_CALL
    );
    println!("------------------------------------------------------------------------------");

    for (name, ua) in SAMPLES {
        // 2. 预热
        for _ in 0..BENCHMARK_WARM_UP_CALL {
            black_box(parse(black_box(ua)));
        }

        // 3. 正式计时
        let start = Instant::now();
        for _ in 0..BENCHMARK_TOTAL_CALL {
            black_box(parse(black_box(ua)));
        }
        let elapsed = start.elapsed();
        let avg_ns = elapsed.as_nanos() / BENCHMARK_TOTAL_CALL as u128;
        let qps = BENCHMARK_TOTAL_CALL as f64 / elapsed.as_secs_f64();

        println!(
            "[{:<8}] 总耗时: {:>8.2?} | 平均: {:>6} ns/次 | QPS: {:>12.0}",
            name, elapsed, avg_ns, qps
        );
    }

    Ok(())
}
