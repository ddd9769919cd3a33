//! Site Config Commands

/// 更新站点配置命令（整体替换）
#[derive(Debug, Clone)]
pub struct UpdateSiteConfig {
    pub site_name: String,
    pub tagline: String,
    pub about: String,
    pub contact_email: String,
    pub phone: String,
    pub address: String,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub youtube: Option<String>,
    pub logo: Option<String>,
}
