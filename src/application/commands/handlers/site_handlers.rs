//! Site Config Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::UpdateSiteConfig;
use crate::application::error::ApplicationError;
use crate::application::ports::SiteConfigRepositoryPort;
use crate::domain::SiteConfig;

// ============================================================================
// UpdateSiteConfig
// ============================================================================

/// UpdateSiteConfig Handler - 整体替换站点配置
pub struct UpdateSiteConfigHandler {
    site_config_repo: Arc<dyn SiteConfigRepositoryPort>,
}

impl UpdateSiteConfigHandler {
    pub fn new(site_config_repo: Arc<dyn SiteConfigRepositoryPort>) -> Self {
        Self { site_config_repo }
    }

    pub async fn handle(&self, command: UpdateSiteConfig) -> Result<SiteConfig, ApplicationError> {
        if command.site_name.trim().is_empty() {
            return Err(ApplicationError::validation("site_name must not be empty"));
        }

        let config = SiteConfig {
            site_name: command.site_name,
            tagline: command.tagline,
            about: command.about,
            contact_email: command.contact_email,
            phone: command.phone,
            address: command.address,
            twitter: command.twitter,
            linkedin: command.linkedin,
            instagram: command.instagram,
            facebook: command.facebook,
            youtube: command.youtube,
            logo: command.logo,
            updated_at: Utc::now(),
        };

        self.site_config_repo.update(&config).await?;

        tracing::info!(site_name = %config.site_name, "Site config updated");

        Ok(config)
    }
}
