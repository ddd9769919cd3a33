//! Editorial Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EditorialId, EditorialStatus, Layout, Style, Title};
use crate::domain::author::AuthorId;
use crate::domain::sections::{split_three, split_five};
use crate::domain::theme::ThemeId;

/// Editorial 聚合根
///
/// 不变量:
/// - 状态只能通过工作流方法流转（发布/排期/下线/恢复）
/// - published_at 只在实际发布时写入
/// - 下线后 active 必为 false
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Editorial {
    id: EditorialId,
    title: Title,
    body: String,
    author_id: Option<AuthorId>,
    theme_ids: Vec<ThemeId>,
    layout: Layout,
    style: Style,
    image1: Option<String>,
    image2: Option<String>,
    image3: Option<String>,
    status: EditorialStatus,
    published_at: Option<DateTime<Utc>>,
    scheduled: bool,
    scheduled_at: Option<DateTime<Utc>>,
    active: bool,
    views: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Editorial {
    /// 创建新社论（草稿状态）
    pub fn new(title: Title, body: impl Into<String>, layout: Layout, style: Style) -> Self {
        let now = Utc::now();
        Self {
            id: EditorialId::new(),
            title,
            body: body.into(),
            author_id: None,
            theme_ids: Vec::new(),
            layout,
            style,
            image1: None,
            image2: None,
            image3: None,
            status: EditorialStatus::Draft,
            published_at: None,
            scheduled: false,
            scheduled_at: None,
            active: true,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// 是否可以发布（草稿或已排期）
    pub fn can_publish(&self) -> bool {
        matches!(
            self.status,
            EditorialStatus::Draft | EditorialStatus::Scheduled
        )
    }

    /// 立即发布
    pub fn publish_now(&mut self) -> Result<(), &'static str> {
        if !self.can_publish() {
            return Err("当前状态不可发布");
        }
        self.status = EditorialStatus::Published;
        self.published_at = Some(Utc::now());
        self.scheduled = false;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 排期发布，时间必须在未来
    pub fn schedule(&mut self, at: DateTime<Utc>) -> Result<(), &'static str> {
        if at <= Utc::now() {
            return Err("排期时间必须晚于当前时间");
        }
        self.status = EditorialStatus::Scheduled;
        self.scheduled = true;
        self.scheduled_at = Some(at);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// 下线社论
    pub fn deactivate(&mut self) {
        self.status = EditorialStatus::Deactivated;
        self.active = false;
        self.updated_at = Utc::now();
    }

    /// 恢复已下线的社论，直接回到已发布状态
    ///
    /// published_at 保持原值，从未发布过的社论恢复后依旧不会进入公开列表
    pub fn reactivate(&mut self) {
        self.active = true;
        self.status = EditorialStatus::Published;
        self.updated_at = Utc::now();
    }

    /// 记录一次公开阅读
    ///
    /// 阅读不算编辑，不触碰 updated_at
    pub fn record_view(&mut self) {
        self.views += 1;
    }

    /// 修订标题、正文与版式
    pub fn revise(&mut self, title: Title, body: impl Into<String>, layout: Layout, style: Style) {
        self.title = title;
        self.body = body.into();
        self.layout = layout;
        self.style = style;
        self.updated_at = Utc::now();
    }

    /// 指定作者（None 表示撤下署名）
    pub fn assign_author(&mut self, author_id: Option<AuthorId>) {
        self.author_id = author_id;
        self.updated_at = Utc::now();
    }

    /// 重设主题标签
    pub fn set_themes(&mut self, theme_ids: Vec<ThemeId>) {
        self.theme_ids = theme_ids;
        self.updated_at = Utc::now();
    }

    /// 设置配图（最多 3 张）
    pub fn set_images(
        &mut self,
        image1: Option<String>,
        image2: Option<String>,
        image3: Option<String>,
    ) {
        self.image1 = image1;
        self.image2 = image2;
        self.image3 = image3;
        self.updated_at = Utc::now();
    }

    /// 按版式把正文切成排版小节
    ///
    /// 版式对应关系:
    /// - Banner: 正文整体单节
    /// - Columns: 3 节
    /// - Grid: 5 节
    pub fn sections(&self) -> Vec<String> {
        match self.layout {
            Layout::Banner => vec![self.body.clone()],
            Layout::Columns => split_three(&self.body).to_vec(),
            Layout::Grid => split_five(&self.body).to_vec(),
        }
    }

    // Getters
    pub fn id(&self) -> &EditorialId {
        &self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn author_id(&self) -> Option<&AuthorId> {
        self.author_id.as_ref()
    }

    pub fn theme_ids(&self) -> &[ThemeId] {
        &self.theme_ids
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn image1(&self) -> Option<&str> {
        self.image1.as_deref()
    }

    pub fn image2(&self) -> Option<&str> {
        self.image2.as_deref()
    }

    pub fn image3(&self) -> Option<&str> {
        self.image3.as_deref()
    }

    pub fn status(&self) -> EditorialStatus {
        self.status
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        self.scheduled_at
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn views(&self) -> u64 {
        self.views
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// 从持久化字段重建聚合（跳过工作流，字段原样恢复）
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: EditorialId,
        title: Title,
        body: String,
        author_id: Option<AuthorId>,
        theme_ids: Vec<ThemeId>,
        layout: Layout,
        style: Style,
        image1: Option<String>,
        image2: Option<String>,
        image3: Option<String>,
        status: EditorialStatus,
        published_at: Option<DateTime<Utc>>,
        scheduled: bool,
        scheduled_at: Option<DateTime<Utc>>,
        active: bool,
        views: u64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            body,
            author_id,
            theme_ids,
            layout,
            style,
            image1,
            image2,
            image3,
            status,
            published_at,
            scheduled,
            scheduled_at,
            active,
            views,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft() -> Editorial {
        let title = Title::new("测试社论").unwrap();
        Editorial::new(title, "正文内容", Layout::Banner, Style::default())
    }

    #[test]
    fn test_new_editorial_starts_as_active_draft() {
        let editorial = draft();

        assert_eq!(editorial.status(), EditorialStatus::Draft);
        assert!(editorial.is_active());
        assert_eq!(editorial.views(), 0);
        assert!(editorial.published_at().is_none());
    }

    #[test]
    fn test_publish_from_draft_sets_timestamp() {
        let mut editorial = draft();

        editorial.publish_now().unwrap();

        assert_eq!(editorial.status(), EditorialStatus::Published);
        assert!(editorial.published_at().is_some());
        assert!(!editorial.is_scheduled());
    }

    #[test]
    fn test_publish_twice_is_rejected() {
        let mut editorial = draft();
        editorial.publish_now().unwrap();

        assert!(editorial.publish_now().is_err());
    }

    #[test]
    fn test_schedule_requires_future_date() {
        let mut editorial = draft();

        let past = Utc::now() - Duration::hours(1);
        assert!(editorial.schedule(past).is_err());

        let future = Utc::now() + Duration::hours(1);
        editorial.schedule(future).unwrap();
        assert_eq!(editorial.status(), EditorialStatus::Scheduled);
        assert_eq!(editorial.scheduled_at(), Some(future));
        assert!(editorial.is_scheduled());
    }

    #[test]
    fn test_scheduled_editorial_can_publish() {
        let mut editorial = draft();
        editorial.schedule(Utc::now() + Duration::hours(1)).unwrap();

        editorial.publish_now().unwrap();
        assert!(!editorial.is_scheduled());
    }

    #[test]
    fn test_deactivate_and_reactivate() {
        let mut editorial = draft();
        editorial.publish_now().unwrap();
        let published_at = editorial.published_at();

        editorial.deactivate();
        assert_eq!(editorial.status(), EditorialStatus::Deactivated);
        assert!(!editorial.is_active());

        editorial.reactivate();
        assert_eq!(editorial.status(), EditorialStatus::Published);
        assert!(editorial.is_active());
        // 恢复不重写发布时间
        assert_eq!(editorial.published_at(), published_at);
    }

    #[test]
    fn test_record_view_counts_up_without_touching_updated_at() {
        let mut editorial = draft();
        let updated_at = editorial.updated_at();

        editorial.record_view();
        editorial.record_view();

        assert_eq!(editorial.views(), 2);
        assert_eq!(editorial.updated_at(), updated_at);
    }

    #[test]
    fn test_sections_follow_layout() {
        let title = Title::new("版式测试").unwrap();
        let body = "P0\n\nP1\n\nP2\n\nP3\n\nP4";

        let banner = Editorial::new(title.clone(), body, Layout::Banner, Style::default());
        assert_eq!(banner.sections(), vec![body.to_string()]);

        let columns = Editorial::new(title.clone(), body, Layout::Columns, Style::default());
        assert_eq!(columns.sections().len(), 3);

        let grid = Editorial::new(title, body, Layout::Grid, Style::default());
        assert_eq!(grid.sections(), vec!["P0", "P1", "P2", "P3", "P4"]);
    }
}
