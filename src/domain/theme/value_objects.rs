//! Theme Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 主题唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeId(Uuid);

impl ThemeId {
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

impl Default for ThemeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 主题名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeName(String);

impl ThemeName {
    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("主题名称不能为空");
        }
        if name.chars().count() > 100 {
            return Err("主题名称不能超过100字符");
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URL 友好的主题标识串
///
/// 只允许小写字母、数字、连字符和下划线
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    pub fn new(slug: impl Into<String>) -> Result<Self, &'static str> {
        let slug = slug.into();
        if slug.is_empty() {
            return Err("slug 不能为空");
        }
        if slug.len() > 100 {
            return Err("slug 不能超过100字符");
        }
        let valid = slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if !valid {
            return Err("slug 只能包含小写字母、数字、连字符和下划线");
        }
        Ok(Self(slug))
    }

    /// 从名称派生 slug：折叠重音、转小写，非字母数字的连续段折叠为单个连字符
    pub fn from_name(name: &str) -> Result<Self, &'static str> {
        let mut slug = String::with_capacity(name.len());
        let mut pending_separator = false;

        for ch in name.chars().map(fold_accent) {
            if ch.is_ascii_alphanumeric() {
                if pending_separator && !slug.is_empty() {
                    slug.push('-');
                }
                pending_separator = false;
                slug.push(ch.to_ascii_lowercase());
            } else {
                pending_separator = true;
            }
        }

        Self::new(slug)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 常见拉丁重音字符折叠为 ASCII
fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        _ => ch,
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_validation() {
        assert!(ThemeName::new("Tecnologia").is_ok());
        assert!(ThemeName::new("  ").is_err());
        assert!(ThemeName::new("x".repeat(101)).is_err());
    }

    #[test]
    fn test_slug_rejects_invalid_characters() {
        assert!(Slug::new("meio-ambiente").is_ok());
        assert!(Slug::new("esportes_2024").is_ok());
        assert!(Slug::new("Maiúscula").is_err());
        assert!(Slug::new("com espaço").is_err());
        assert!(Slug::new("").is_err());
    }

    #[test]
    fn test_slug_derived_from_name() {
        assert_eq!(Slug::from_name("Saúde").unwrap().as_str(), "saude");
        assert_eq!(
            Slug::from_name("Meio Ambiente & Clima").unwrap().as_str(),
            "meio-ambiente-clima"
        );
        assert_eq!(Slug::from_name("  Economia  ").unwrap().as_str(), "economia");
        // 名称不含任何字母数字时派生失败
        assert!(Slug::from_name("!!!").is_err());
    }
}
