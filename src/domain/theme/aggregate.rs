//! Theme Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Slug, ThemeId, ThemeName};

/// Theme 聚合根
///
/// 不变量:
/// - name 与 slug 全站唯一（由存储层约束兜底）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    id: ThemeId,
    name: ThemeName,
    slug: Slug,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Theme {
    /// 创建新主题
    pub fn new(name: ThemeName, slug: Slug, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ThemeId::new(),
            name,
            slug,
            description,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    // Getters
    pub fn id(&self) -> &ThemeId {
        &self.id
    }

    pub fn name(&self) -> &ThemeName {
        &self.name
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let name = ThemeName::new("Tecnologia").unwrap();
        let slug = Slug::new("tecnologia").unwrap();
        let theme = Theme::new(name, slug, Some("Novidades de tecnologia".to_string()));

        assert_eq!(theme.name().as_str(), "Tecnologia");
        assert_eq!(theme.slug().as_str(), "tecnologia");
        assert!(theme.is_active());
    }
}
