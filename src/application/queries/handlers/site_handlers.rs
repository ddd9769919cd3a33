//! Site Config Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::SiteConfigRepositoryPort;
use crate::application::queries::GetSiteConfig;
use crate::domain::SiteConfig;

/// GetSiteConfig Handler - 不存在则落默认值
pub struct GetSiteConfigHandler {
    site_config_repo: Arc<dyn SiteConfigRepositoryPort>,
}

impl GetSiteConfigHandler {
    pub fn new(site_config_repo: Arc<dyn SiteConfigRepositoryPort>) -> Self {
        Self { site_config_repo }
    }

    pub async fn handle(&self, _query: GetSiteConfig) -> Result<SiteConfig, ApplicationError> {
        Ok(self.site_config_repo.get().await?)
    }
}
