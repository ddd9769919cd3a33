//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::author::{Author, AuthorId};
use crate::domain::editorial::{Editorial, EditorialId, EditorialStatus, Layout, Style, Title};
use crate::domain::newsletter::{EmailAddress, Subscription, SubscriptionId};
use crate::domain::theme::{Theme, ThemeId};
use crate::domain::SiteConfig;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Editorial Repository
// ============================================================================

/// 社论实体（用于持久化）
#[derive(Debug, Clone)]
pub struct EditorialRecord {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub author_id: Option<Uuid>,
    pub theme_ids: Vec<Uuid>,
    pub layout: Layout,
    pub style: u8,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub status: EditorialStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub scheduled: bool,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub active: bool,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Editorial> for EditorialRecord {
    fn from(editorial: &Editorial) -> Self {
        Self {
            id: *editorial.id().as_uuid(),
            title: editorial.title().as_str().to_string(),
            body: editorial.body().to_string(),
            author_id: editorial.author_id().map(|id| *id.as_uuid()),
            theme_ids: editorial.theme_ids().iter().map(|id| *id.as_uuid()).collect(),
            layout: editorial.layout(),
            style: editorial.style().value(),
            image1: editorial.image1().map(str::to_string),
            image2: editorial.image2().map(str::to_string),
            image3: editorial.image3().map(str::to_string),
            status: editorial.status(),
            published_at: editorial.published_at(),
            scheduled: editorial.is_scheduled(),
            scheduled_at: editorial.scheduled_at(),
            active: editorial.is_active(),
            views: editorial.views(),
            created_at: editorial.created_at(),
            updated_at: editorial.updated_at(),
        }
    }
}

impl TryFrom<EditorialRecord> for Editorial {
    type Error = &'static str;

    fn try_from(record: EditorialRecord) -> Result<Self, Self::Error> {
        let title = Title::new(record.title)?;
        let style = Style::new(record.style)?;

        Ok(Editorial::restore(
            EditorialId::from_uuid(record.id),
            title,
            record.body,
            record.author_id.map(AuthorId::from_uuid),
            record.theme_ids.into_iter().map(ThemeId::from_uuid).collect(),
            record.layout,
            style,
            record.image1,
            record.image2,
            record.image3,
            record.status,
            record.published_at,
            record.scheduled,
            record.scheduled_at,
            record.active,
            record.views,
            record.created_at,
            record.updated_at,
        ))
    }
}

/// Editorial Repository Port
#[async_trait]
pub trait EditorialRepositoryPort: Send + Sync {
    /// 保存社论（含主题关联）
    async fn save(&self, editorial: &EditorialRecord) -> Result<(), RepositoryError>;

    /// 整体更新社论（主题关联整体替换）
    async fn update(&self, editorial: &EditorialRecord) -> Result<(), RepositoryError>;

    /// 根据 ID 查找社论（不限状态，供管理端使用）
    async fn find_by_id(&self, id: Uuid) -> Result<Option<EditorialRecord>, RepositoryError>;

    /// 获取所有社论（管理端列表）
    async fn find_all(&self) -> Result<Vec<EditorialRecord>, RepositoryError>;

    /// 删除社论（含主题关联）
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// 根据 ID 查找公开可见的社论
    ///
    /// 公开可见 = published + active + 发布时间不晚于当前
    async fn find_published_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<EditorialRecord>, RepositoryError>;

    /// 公开可见的社论，按发布时间倒序
    async fn find_published(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<EditorialRecord>, RepositoryError>;

    /// 某主题下公开可见的社论
    async fn find_published_by_theme(
        &self,
        theme_slug: &str,
    ) -> Result<Vec<EditorialRecord>, RepositoryError>;

    /// 某作者署名的公开可见社论
    async fn find_published_by_author(
        &self,
        author_id: Uuid,
    ) -> Result<Vec<EditorialRecord>, RepositoryError>;

    /// 标题/正文/主题名的大小写不敏感子串检索（仅公开可见）
    async fn search_published(
        &self,
        query: &str,
    ) -> Result<Vec<EditorialRecord>, RepositoryError>;

    /// 相关社论：与指定社论共享主题的其他公开社论
    async fn find_related(
        &self,
        editorial_id: Uuid,
        limit: usize,
    ) -> Result<Vec<EditorialRecord>, RepositoryError>;

    /// 浏览计数原子自增
    async fn increment_views(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// 到期待发布的排期社论（scheduled 且排期时间不晚于 now）
    async fn find_due_scheduled(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<EditorialRecord>, RepositoryError>;
}

// ============================================================================
// Theme Repository
// ============================================================================

/// 主题实体（用于持久化）
#[derive(Debug, Clone)]
pub struct ThemeRecord {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Theme> for ThemeRecord {
    fn from(theme: &Theme) -> Self {
        Self {
            id: *theme.id().as_uuid(),
            name: theme.name().as_str().to_string(),
            slug: theme.slug().as_str().to_string(),
            description: theme.description().map(str::to_string),
            active: theme.is_active(),
            created_at: theme.created_at(),
            updated_at: theme.updated_at(),
        }
    }
}

/// Theme Repository Port
#[async_trait]
pub trait ThemeRepositoryPort: Send + Sync {
    /// 保存主题
    async fn save(&self, theme: &ThemeRecord) -> Result<(), RepositoryError>;

    /// 获取所有启用的主题，按名称排序
    async fn find_all_active(&self) -> Result<Vec<ThemeRecord>, RepositoryError>;

    /// 根据 slug 查找主题（不限启用状态）
    async fn find_by_slug(&self, slug: &str) -> Result<Option<ThemeRecord>, RepositoryError>;

    /// 按 ID 批量查找（用于校验传入的主题列表）
    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ThemeRecord>, RepositoryError>;

    /// 主题总数（含停用）
    async fn count(&self) -> Result<usize, RepositoryError>;
}

// ============================================================================
// Author Repository
// ============================================================================

/// 作者实体（用于持久化）
#[derive(Debug, Clone)]
pub struct AuthorRecord {
    pub id: Uuid,
    pub full_name: String,
    pub nickname: String,
    pub bio: String,
    pub photo: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub website: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Author> for AuthorRecord {
    fn from(author: &Author) -> Self {
        let socials = author.socials();
        Self {
            id: *author.id().as_uuid(),
            full_name: author.full_name().to_string(),
            nickname: author.nickname().as_str().to_string(),
            bio: author.bio().to_string(),
            photo: author.photo().map(str::to_string),
            twitter: socials.twitter.clone(),
            linkedin: socials.linkedin.clone(),
            instagram: socials.instagram.clone(),
            facebook: socials.facebook.clone(),
            website: socials.website.clone(),
            active: author.is_active(),
            created_at: author.created_at(),
            updated_at: author.updated_at(),
        }
    }
}

/// Author Repository Port
#[async_trait]
pub trait AuthorRepositoryPort: Send + Sync {
    /// 保存作者
    async fn save(&self, author: &AuthorRecord) -> Result<(), RepositoryError>;

    /// 根据 ID 查找作者
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthorRecord>, RepositoryError>;

    /// 根据笔名查找作者（不限在职状态）
    async fn find_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<AuthorRecord>, RepositoryError>;

    /// 获取所有在职作者，按姓名排序
    async fn find_all_active(&self) -> Result<Vec<AuthorRecord>, RepositoryError>;
}

// ============================================================================
// Subscription Repository
// ============================================================================

/// 订阅实体（用于持久化）
#[derive(Debug, Clone)]
pub struct SubscriptionRecord {
    pub id: Uuid,
    pub email: String,
    pub theme_ids: Vec<Uuid>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Subscription> for SubscriptionRecord {
    fn from(subscription: &Subscription) -> Self {
        Self {
            id: *subscription.id().as_uuid(),
            email: subscription.email().as_str().to_string(),
            theme_ids: subscription
                .theme_ids()
                .iter()
                .map(|id| *id.as_uuid())
                .collect(),
            active: subscription.is_active(),
            created_at: subscription.created_at(),
            updated_at: subscription.updated_at(),
        }
    }
}

impl TryFrom<SubscriptionRecord> for Subscription {
    type Error = &'static str;

    fn try_from(record: SubscriptionRecord) -> Result<Self, Self::Error> {
        let email = EmailAddress::new(record.email)?;

        Ok(Subscription::restore(
            SubscriptionId::from_uuid(record.id),
            email,
            record.theme_ids.into_iter().map(ThemeId::from_uuid).collect(),
            record.active,
            record.created_at,
            record.updated_at,
        ))
    }
}

/// Subscription Repository Port
#[async_trait]
pub trait SubscriptionRepositoryPort: Send + Sync {
    /// 保存订阅（含主题关联）
    async fn save(&self, subscription: &SubscriptionRecord) -> Result<(), RepositoryError>;

    /// 整体更新订阅（主题关联整体替换）
    async fn update(&self, subscription: &SubscriptionRecord) -> Result<(), RepositoryError>;

    /// 根据邮箱查找订阅（不限激活状态）
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubscriptionRecord>, RepositoryError>;

    /// 获取所有订阅，按创建时间倒序
    async fn find_all(&self) -> Result<Vec<SubscriptionRecord>, RepositoryError>;
}

// ============================================================================
// Site Config Repository
// ============================================================================

/// Site Config Repository Port
///
/// 站点配置是单例记录，读取时不存在则落默认值
#[async_trait]
pub trait SiteConfigRepositoryPort: Send + Sync {
    /// 读取站点配置（get-or-create）
    async fn get(&self) -> Result<SiteConfig, RepositoryError>;

    /// 整体写回站点配置
    async fn update(&self, config: &SiteConfig) -> Result<(), RepositoryError>;
}
