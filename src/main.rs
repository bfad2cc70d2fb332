//! rsuseragent 命令行工具
//! 从参数或标准输入（逐行）读取 UA，输出分类结果
//! 运行命令: cargo run --features cli -- "Mozilla/5.0 ..."

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rsuseragent::{ConfigManager, UaClassifier, UserAgent};

#[derive(Debug, Parser)]
#[command(name = "rsuseragent", version, about = "Classify user agent strings")]
struct Cli {
    /// 待分类的 UA；为空时从标准输入逐行读取
    user_agents: Vec<String>,

    /// 每行输出一个 JSON 对象
    #[arg(long)]
    json: bool,

    /// 爬虫判定时忽略浏览器维度
    #[arg(long)]
    exclude_browser: bool,

    /// 日志详细程度（-v debug，-vv trace）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env().filter_level(level).init();

    let config = ConfigManager::custom()
        .include_browser(!cli.exclude_browser)
        .build();
    let classifier = UaClassifier::new(config).context("failed to build user agent classifier")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.user_agents.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read user agent from stdin")?;
            let ua = classifier.classify(&line);
            write_result(&mut out, &classifier, &ua, cli.json)?;
        }
    } else {
        for input in &cli.user_agents {
            let ua = classifier.classify(input);
            write_result(&mut out, &classifier, &ua, cli.json)?;
        }
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

fn write_result(out: &mut impl Write, classifier: &UaClassifier, ua: &UserAgent, json: bool) -> Result<()> {
    let is_bot = classifier.is_bot(ua);
    if json {
        let mut value = serde_json::to_value(ua)?;
        value["is_bot"] = serde_json::Value::Bool(is_bot);
        writeln!(out, "{}", value)?;
    } else {
        writeln!(
            out,
            "{} | os: {} | bot: {}",
            ua,
            ua.operating_system(),
            is_bot
        )?;
    }
    Ok(())
}
