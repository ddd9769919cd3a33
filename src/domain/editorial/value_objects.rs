//! Editorial Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 社论唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditorialId(Uuid);

impl EditorialId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EditorialId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EditorialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 社论标题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, &'static str> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err("标题不能为空");
        }
        if title.chars().count() > 200 {
            return Err("标题长度不能超过200字符");
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 发布状态
///
/// 流转: draft → scheduled → published → deactivated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorialStatus {
    /// 草稿
    Draft,
    /// 已排期
    Scheduled,
    /// 已发布
    Published,
    /// 已下线
    Deactivated,
}

impl EditorialStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorialStatus::Draft => "draft",
            EditorialStatus::Scheduled => "scheduled",
            EditorialStatus::Published => "published",
            EditorialStatus::Deactivated => "deactivated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(EditorialStatus::Draft),
            "scheduled" => Some(EditorialStatus::Scheduled),
            "published" => Some(EditorialStatus::Published),
            "deactivated" => Some(EditorialStatus::Deactivated),
            _ => None,
        }
    }
}

impl Default for EditorialStatus {
    fn default() -> Self {
        EditorialStatus::Draft
    }
}

/// 版式模板
///
/// 决定正文被切成几节以及配图数量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// 大图通栏，正文整体单节
    #[serde(rename = "layout1")]
    Banner,
    /// 三栏排版，正文切 3 节
    #[serde(rename = "layout2")]
    Columns,
    /// 报纸网格，正文切 5 节
    #[serde(rename = "layout3")]
    Grid,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Banner => "layout1",
            Layout::Columns => "layout2",
            Layout::Grid => "layout3",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "layout1" => Some(Layout::Banner),
            "layout2" => Some(Layout::Columns),
            "layout3" => Some(Layout::Grid),
            _ => None,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Banner
    }
}

/// 样式编号（1~3）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style(u8);

impl Style {
    pub fn new(value: u8) -> Result<Self, &'static str> {
        if !(1..=3).contains(&value) {
            return Err("样式编号必须在1到3之间");
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Style {
    fn default() -> Self {
        Self(1)
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_rejects_empty_and_overlong() {
        assert!(Title::new("").is_err());
        assert!(Title::new("   ").is_err());
        assert!(Title::new("a".repeat(201)).is_err());
        assert!(Title::new("a".repeat(200)).is_ok());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            EditorialStatus::Draft,
            EditorialStatus::Scheduled,
            EditorialStatus::Published,
            EditorialStatus::Deactivated,
        ] {
            assert_eq!(EditorialStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(EditorialStatus::from_str("unknown"), None);
    }

    #[test]
    fn test_layout_wire_names() {
        assert_eq!(Layout::Banner.as_str(), "layout1");
        assert_eq!(Layout::from_str("layout3"), Some(Layout::Grid));
        assert_eq!(Layout::from_str("layout9"), None);
    }

    #[test]
    fn test_style_range() {
        assert!(Style::new(0).is_err());
        assert!(Style::new(4).is_err());
        assert_eq!(Style::new(2).map(|s| s.value()), Ok(2));
    }
}
