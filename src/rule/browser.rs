//! 浏览器维度规则表
//! 优先级列表而非集合：按声明顺序扫描，首个命中即返回。
//! 基于Chromium的具名浏览器必须排在 Chrome 之前，Chrome 必须排在 Safari 之前，
//! 通用爬虫兜底规则必须排在最后。

use super::model::BrowserRuleSpec as R;

pub static BROWSER_RULES: &[R] = &[
    // 具名浏览器（Chromium分支在前）
    R::browser("Opera GX", r"oprgx"),
    R::browser("Opera", r"opera|opr/"),
    R::browser("Edge", r"edge|edg/|edga/|edgios/"),
    R::browser("Samsung Internet", r"samsungbrowser"),
    R::browser("Brave", r"brave"),
    R::browser("Vivaldi", r"vivaldi"),
    R::browser("Arc", r"\barc/"),
    R::browser("DuckDuckGo", r"\bddg/|duckduckgo/"),
    // Tor 基于 Firefox ESR
    R::browser("Tor Browser", r"tor browser"),
    R::browser("Chrome", r"chrome|crios"),
    // FxiOS 同时带有 Safari 标记
    R::browser("Firefox", r"firefox|fxios"),
    R::browser("Safari", r"safari"),
    R::browser("Internet Explorer", r"msie|trident/7"),
    // 搜索引擎
    R::bot("[Bot] Googlebot", r"google"),
    R::bot("[Bot] Bingbot", r"bing"),
    R::bot("[Bot] Yahoo! Slurp", r"slurp"),
    R::bot("[Bot] DuckDuckBot", r"duckduckgo|duckduckbot"),
    R::bot("[Bot] Baidu", r"baidu"),
    R::bot("[Bot] Yandex", r"yandex"),
    R::bot("[Bot] Sogou", r"sogou"),
    R::bot("[Bot] Exabot", r"exabot"),
    R::bot("[Bot] MSN", r"msn"),
    // AI 爬虫
    R::bot("[Bot] ClaudeBot", r"claudebot|claude-web|anthropic-ai"),
    R::bot("[Bot] GPTBot", r"gptbot"),
    R::bot("[Bot] ChatGPT", r"chatgpt"),
    R::bot("[Bot] PerplexityBot", r"perplexity"),
    // 社交媒体
    R::bot("[Bot] Facebook", r"facebook"),
    R::bot("[Bot] Pinterest", r"pinterest"),
    R::bot("[Bot] LinkedInBot", r"linkedin"),
    R::bot("[Bot] Instagram", r"instagram"),
    R::bot("[Bot] Twitterbot", r"twitter"),
    R::bot("[Bot] Snapchat", r"snapchat"),
    R::bot("[Bot] Discord", r"discord"),
    // 常见SEO/监控工具
    R::bot("[Bot] Majestic", r"mj12bot"),
    R::bot("[Bot] Ahrefs", r"ahrefs"),
    R::bot("[Bot] SEMRush", r"semrush"),
    R::bot("[Bot] Moz or OpenSiteExplorer", r"rogerbot|dotbot"),
    R::bot("[Bot] Screaming Frog", r"frog|screaming"),
    R::bot("[Bot] Pingdom", r"pingdom"),
    R::bot("[Bot] Riddler", r"riddler"),
    R::bot("[Bot] W3C Validator", r"w3c_validator"),
    // 兜底：爬虫UA常见子串，必须最后
    R::bot("[Bot] Other", r"crawler|api|spider|http|bot|archive|info|data"),
];
