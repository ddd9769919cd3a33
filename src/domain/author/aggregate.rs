//! Author Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AuthorId, Nickname, SocialLinks};

/// Author 聚合根
///
/// 不变量:
/// - nickname 全站唯一（由存储层约束兜底）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    full_name: String,
    nickname: Nickname,
    bio: String,
    photo: Option<String>,
    socials: SocialLinks,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Author {
    /// 创建新作者
    pub fn new(full_name: impl Into<String>, nickname: Nickname, bio: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: AuthorId::new(),
            full_name: full_name.into(),
            nickname,
            bio: bio.into(),
            photo: None,
            socials: SocialLinks::default(),
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// 创建带社交链接的作者
    pub fn with_socials(
        full_name: impl Into<String>,
        nickname: Nickname,
        bio: impl Into<String>,
        socials: SocialLinks,
    ) -> Self {
        let mut author = Self::new(full_name, nickname, bio);
        author.socials = socials;
        author
    }

    /// 设置头像
    pub fn set_photo(&mut self, photo: Option<String>) {
        self.photo = photo;
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> &AuthorId {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    pub fn socials(&self) -> &SocialLinks {
        &self.socials
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
    fn test_author_creation() {
        let nickname = Nickname::new("acosta").unwrap();
        let author = Author::new("Ana Costa", nickname, "Jornalista de economia");

        assert_eq!(author.full_name(), "Ana Costa");
        assert_eq!(author.nickname().as_str(), "acosta");
        assert!(author.is_active());
        assert!(author.photo().is_none());
    }

    #[test]
    fn test_author_with_socials() {
        let nickname = Nickname::new("jsilva").unwrap();
        let socials = SocialLinks {
            twitter: Some("https://twitter.com/jsilva".to_string()),
            ..SocialLinks::default()
        };
        let author = Author::with_socials("João Silva", nickname, "Editor-chefe", socials);

        assert!(author.socials().twitter.is_some());
        assert!(author.socials().website.is_none());
    }
}
