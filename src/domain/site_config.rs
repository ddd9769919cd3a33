//! 站点配置
//!
//! 全站单例的可编辑配置，总是整体读写

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 站点配置（单例，存储层固定主键）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// 站点名称
    pub site_name: String,
    /// 站点标语
    pub tagline: String,
    /// 「关于」文案，展示在文章侧栏
    pub about: String,
    /// 联系邮箱
    pub contact_email: String,
    /// 联系电话
    pub phone: String,
    /// 联系地址
    pub address: String,
    // 站点社交媒体
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub youtube: Option<String>,
    /// 站点 logo 路径
    pub logo: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Portal de Notícias".to_string(),
            tagline: String::new(),
            about: String::new(),
            contact_email: String::new(),
            phone: String::new(),
            address: String::new(),
            twitter: None,
            linkedin: None,
            instagram: None,
            facebook: None,
            youtube: None,
            logo: None,
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_name() {
        let config = SiteConfig::default();
        assert_eq!(config.site_name, "Portal de Notícias");
        assert!(config.logo.is_none());
    }
}
