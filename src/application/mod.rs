//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（各 Repository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Author commands
    CreateAuthor,
    // Editorial commands
    CreateEditorial,
    DeactivateEditorial,
    DeleteEditorial,
    PublishEditorial,
    ReactivateEditorial,
    ScheduleEditorial,
    UpdateEditorial,
    // Newsletter commands
    CancelSubscription,
    SubscribeNewsletter,
    // Site commands
    UpdateSiteConfig,
    // Theme commands
    CreateTheme,
    // Handlers
    handlers::{
        CancelSubscriptionHandler, CreateAuthorHandler, CreateAuthorResponse,
        CreateEditorialHandler, CreateEditorialResponse, CreateThemeHandler, CreateThemeResponse,
        DeactivateEditorialHandler, DeleteEditorialHandler, PublishEditorialHandler,
        ReactivateEditorialHandler, ScheduleEditorialHandler, SubscribeNewsletterHandler,
        SubscribeResponse, UpdateEditorialHandler, UpdateSiteConfigHandler, WorkflowResponse,
    },
};

pub use error::ApplicationError;

pub use ports::{
    AuthorRecord,
    AuthorRepositoryPort,
    EditorialRecord,
    EditorialRepositoryPort,
    RepositoryError,
    SiteConfigRepositoryPort,
    SubscriptionRecord,
    SubscriptionRepositoryPort,
    ThemeRecord,
    ThemeRepositoryPort,
};

pub use queries::{
    // Author queries
    GetAuthor,
    ListAuthors,
    // Editorial queries
    EditorialsByAuthor,
    EditorialsByTheme,
    GetEditorial,
    LatestEditorials,
    ListEditorials,
    SearchEditorials,
    ViewEditorial,
    // Newsletter queries
    ListSubscriptions,
    // Site queries
    GetSiteConfig,
    // Theme queries
    ListThemes,
    // Handlers
    handlers::{
        AuthorDetailResponse, AuthorResponse, EditorialDetailResponse,
        EditorialSummaryResponse, EditorialViewResponse, EditorialsByAuthorHandler,
        EditorialsByAuthorResponse, EditorialsByThemeHandler, EditorialsByThemeResponse,
        GetAuthorHandler, GetEditorialHandler, GetSiteConfigHandler, LatestEditorialsHandler,
        ListAuthorsHandler, ListEditorialsHandler, ListSubscriptionsHandler,
        ListThemesHandler, SearchEditorialsHandler, SubscriptionResponse, ThemeResponse,
        ViewEditorialHandler,
    },
};
