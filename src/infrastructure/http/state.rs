//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CancelSubscriptionHandler, CreateAuthorHandler, CreateEditorialHandler, CreateThemeHandler,
    DeactivateEditorialHandler, DeleteEditorialHandler, PublishEditorialHandler,
    ReactivateEditorialHandler, ScheduleEditorialHandler, SubscribeNewsletterHandler,
    UpdateEditorialHandler, UpdateSiteConfigHandler,
    // Query handlers
    EditorialsByAuthorHandler, EditorialsByThemeHandler, GetAuthorHandler, GetEditorialHandler,
    GetSiteConfigHandler, LatestEditorialsHandler, ListAuthorsHandler, ListEditorialsHandler,
    ListSubscriptionsHandler, ListThemesHandler, SearchEditorialsHandler, ViewEditorialHandler,
    // Ports
    AuthorRepositoryPort, EditorialRepositoryPort, SiteConfigRepositoryPort,
    SubscriptionRepositoryPort, ThemeRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub editorial_repo: Arc<dyn EditorialRepositoryPort>,
    pub theme_repo: Arc<dyn ThemeRepositoryPort>,
    pub author_repo: Arc<dyn AuthorRepositoryPort>,
    pub subscription_repo: Arc<dyn SubscriptionRepositoryPort>,
    pub site_config_repo: Arc<dyn SiteConfigRepositoryPort>,

    // ========== Command Handlers ==========
    pub create_editorial_handler: CreateEditorialHandler,
    pub update_editorial_handler: UpdateEditorialHandler,
    pub delete_editorial_handler: DeleteEditorialHandler,
    pub publish_editorial_handler: PublishEditorialHandler,
    pub schedule_editorial_handler: ScheduleEditorialHandler,
    pub deactivate_editorial_handler: DeactivateEditorialHandler,
    pub reactivate_editorial_handler: ReactivateEditorialHandler,
    pub create_theme_handler: CreateThemeHandler,
    pub create_author_handler: CreateAuthorHandler,
    pub subscribe_newsletter_handler: SubscribeNewsletterHandler,
    pub cancel_subscription_handler: CancelSubscriptionHandler,
    pub update_site_config_handler: UpdateSiteConfigHandler,

    // ========== Query Handlers ==========
    pub get_editorial_handler: GetEditorialHandler,
    pub list_editorials_handler: ListEditorialsHandler,
    pub latest_editorials_handler: LatestEditorialsHandler,
    pub editorials_by_theme_handler: EditorialsByThemeHandler,
    pub editorials_by_author_handler: EditorialsByAuthorHandler,
    pub search_editorials_handler: SearchEditorialsHandler,
    pub view_editorial_handler: ViewEditorialHandler,
    pub list_themes_handler: ListThemesHandler,
    pub get_author_handler: GetAuthorHandler,
    pub list_authors_handler: ListAuthorsHandler,
    pub list_subscriptions_handler: ListSubscriptionsHandler,
    pub get_site_config_handler: GetSiteConfigHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        editorial_repo: Arc<dyn EditorialRepositoryPort>,
        theme_repo: Arc<dyn ThemeRepositoryPort>,
        author_repo: Arc<dyn AuthorRepositoryPort>,
        subscription_repo: Arc<dyn SubscriptionRepositoryPort>,
        site_config_repo: Arc<dyn SiteConfigRepositoryPort>,
    ) -> Self {
        Self {
            // Ports
            editorial_repo: editorial_repo.clone(),
            theme_repo: theme_repo.clone(),
            author_repo: author_repo.clone(),
            subscription_repo: subscription_repo.clone(),
            site_config_repo: site_config_repo.clone(),

            // Command handlers
            create_editorial_handler: CreateEditorialHandler::new(
                editorial_repo.clone(),
                theme_repo.clone(),
                author_repo.clone(),
            ),
            update_editorial_handler: UpdateEditorialHandler::new(
                editorial_repo.clone(),
                theme_repo.clone(),
                author_repo.clone(),
            ),
            delete_editorial_handler: DeleteEditorialHandler::new(editorial_repo.clone()),
            publish_editorial_handler: PublishEditorialHandler::new(editorial_repo.clone()),
            schedule_editorial_handler: ScheduleEditorialHandler::new(editorial_repo.clone()),
            deactivate_editorial_handler: DeactivateEditorialHandler::new(editorial_repo.clone()),
            reactivate_editorial_handler: ReactivateEditorialHandler::new(editorial_repo.clone()),
            create_theme_handler: CreateThemeHandler::new(theme_repo.clone()),
            create_author_handler: CreateAuthorHandler::new(author_repo.clone()),
            subscribe_newsletter_handler: SubscribeNewsletterHandler::new(
                subscription_repo.clone(),
                theme_repo.clone(),
            ),
            cancel_subscription_handler: CancelSubscriptionHandler::new(subscription_repo.clone()),
            update_site_config_handler: UpdateSiteConfigHandler::new(site_config_repo.clone()),

            // Query handlers
            get_editorial_handler: GetEditorialHandler::new(editorial_repo.clone()),
            list_editorials_handler: ListEditorialsHandler::new(editorial_repo.clone()),
            latest_editorials_handler: LatestEditorialsHandler::new(editorial_repo.clone()),
            editorials_by_theme_handler: EditorialsByThemeHandler::new(
                editorial_repo.clone(),
                theme_repo.clone(),
            ),
            editorials_by_author_handler: EditorialsByAuthorHandler::new(
                editorial_repo.clone(),
                author_repo.clone(),
            ),
            search_editorials_handler: SearchEditorialsHandler::new(editorial_repo.clone()),
            view_editorial_handler: ViewEditorialHandler::new(editorial_repo.clone()),
            list_themes_handler: ListThemesHandler::new(theme_repo.clone()),
            get_author_handler: GetAuthorHandler::new(author_repo.clone(), editorial_repo.clone()),
            list_authors_handler: ListAuthorsHandler::new(author_repo.clone()),
            list_subscriptions_handler: ListSubscriptionsHandler::new(subscription_repo.clone()),
            get_site_config_handler: GetSiteConfigHandler::new(site_config_repo.clone()),
        }
    }
}
