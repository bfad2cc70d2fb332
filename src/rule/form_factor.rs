//! 设备形态（desktop/mobile/tablet）特征
//! 与浏览器、设备两条规则表独立：先判平板，再判手机，否则桌面。
//! 平板特征是手机特征的细化，顺序不可调换。

use std::fmt;
use serde::Serialize;

/// 平板特征：显式平板标记，或 "mobile" 出现在 "android" 之前（大屏安卓设备误报为mobile）
pub const TABLET_PATTERN: &str = r"tablet|ipad|playbook|mobile.*android";

/// 手机特征：移动OS与移动浏览器标记
pub const MOBILE_PATTERN: &str = r"/mobile|ip(hone|od|ad)|android|blackberry|iemobile|kindle|netfront|silk-accelerated|(hpw|web)os|fennec|minimo|opera m(obi|ini)|blazer|dolfin|dolphin|skyfire|zune/";

/// 设备形态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    #[default]
    Desktop,
    Mobile,
    Tablet,
}

impl FormFactor {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FormFactor::Desktop => "desktop",
            FormFactor::Mobile => "mobile",
            FormFactor::Tablet => "tablet",
        }
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_factor_as_str() {
        assert_eq!(FormFactor::Desktop.as_str(), "desktop");
        assert_eq!(FormFactor::Mobile.as_str(), "mobile");
        assert_eq!(FormFactor::Tablet.to_string(), "tablet");
        assert_eq!(FormFactor::default(), FormFactor::Desktop);
    }

    #[test]
    fn test_form_factor_serialize_lowercase() {
        let json = serde_json::to_string(&FormFactor::Tablet).unwrap();
        assert_eq!(json, "\"tablet\"");
    }
}
