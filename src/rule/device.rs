//! 设备/OS维度规则表
//! 同样是优先级列表。窄版本特征在宽特征之前；多个版本共享的标记
//! （如 64 位进程标记 WOW64/Win64）不允许出现在任何单一版本的模式中。

use super::model::{DeviceRuleSpec as R, os};

pub static DEVICE_RULES: &[R] = &[
    // Windows：各版本只使用本版本独有的标记
    R::new("Windows 3.11", r"win16", os::WINDOWS),
    R::new("Windows 95", r"windows 95|win95|windows_95", os::WINDOWS),
    // ME 的 UA 同时带有 "Windows 98"，独有标记为 "Win 9x 4.90"
    R::new("Windows ME", r"windows me\b|win 9x 4\.90", os::WINDOWS),
    R::new("Windows 98", r"windows 98|win98", os::WINDOWS),
    R::new("Windows 2000", r"windows nt 5\.0|windows 2000", os::WINDOWS),
    R::new("Windows XP", r"windows nt 5\.1|windows xp", os::WINDOWS),
    R::new("Windows Server 2003", r"windows nt 5\.2", os::WINDOWS),
    R::new("Windows Vista", r"windows nt 6\.0", os::WINDOWS),
    R::new("Windows 7", r"windows nt 6\.1", os::WINDOWS),
    R::new("Windows 8", r"windows nt 6\.2", os::WINDOWS),
    R::new("Windows 8.1", r"windows nt 6\.3", os::WINDOWS),
    R::new("Windows 10", r"windows 10\.0|windows nt 10\.0", os::WINDOWS),
    // 泛化的 NT 兜底，必须在所有 NT 版本之后
    R::new("Windows NT 4.0", r"windows nt 4\.0|winnt4\.0|winnt|windows nt", os::WINDOWS),
    R::new("Open BSD", r"openbsd", os::LINUX),
    R::new("Sun OS", r"sunos", os::LINUX),
    // CrOS 与 Android 的 UA 都带 X11/Linux
    R::new("Chrome OS", r"\bcros\b", os::CHROMEOS),
    R::new("Android", r"android", os::ANDROID),
    R::new("Ubuntu", r"ubuntu", os::UBUNTU),
    R::new("Suse", r"suse", os::SUSE),
    R::new("Redhat", r"redhat", os::REDHAT),
    R::new("Fedora", r"fedora", os::FEDORA),
    R::new("Centos", r"centos", os::CENTOS),
    R::new("Linux", r"linux|x11", os::LINUX),
    R::new("Mac OS", r"mac_powerpc|macintosh", os::MACOS),
    R::new("QNX", r"qnx", os::QNX),
    R::new("BeOS", r"beos", os::BEOS),
    R::new("OS/2", r"\bos/2", os::OS2),
    R::new("iPhone", r"iphone", os::IOS),
    R::new("iPad", r"ipad", os::IOS),
    R::new("iPod", r"ipod", os::IOS),
    // 放在最后：应用内浏览器（Instagram/Pinterest/Snapchat）会带真实设备标记
    R::new(
        "Search Bot",
        r"nuhk|googlebot|yammybot|openbot|slurp|msnbot|ask jeeves/teoma|ia_archiver|baiduspider|facebookexternalhit|twitterbot|riddler|linkedinbot|instagram|pinterest|chatgpt|gptbot|claudebot|perplexitybot|bingbot|duckduckbot|yandexbot|snapchat|discordbot",
        os::BOT,
    ),
];
