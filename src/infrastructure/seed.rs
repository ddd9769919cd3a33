//! Sample Data Seeder - 开发用示例数据
//!
//! 主题表为空时写入一份固定数据集，覆盖三种版式与全部状态

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::application::ports::{
    AuthorRecord, AuthorRepositoryPort, EditorialRecord, EditorialRepositoryPort, ThemeRecord,
    ThemeRepositoryPort,
};
use crate::domain::author::{Author, AuthorId, Nickname};
use crate::domain::editorial::{Editorial, Layout, Style, Title};
use crate::domain::theme::{Slug, Theme, ThemeId, ThemeName};

/// 示例数据装载器
pub struct SampleDataSeeder {
    editorial_repo: Arc<dyn EditorialRepositoryPort>,
    theme_repo: Arc<dyn ThemeRepositoryPort>,
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl SampleDataSeeder {
    pub fn new(
        editorial_repo: Arc<dyn EditorialRepositoryPort>,
        theme_repo: Arc<dyn ThemeRepositoryPort>,
        author_repo: Arc<dyn AuthorRepositoryPort>,
    ) -> Self {
        Self {
            editorial_repo,
            theme_repo,
            author_repo,
        }
    }

    /// 装载示例数据，主题表非空则整体跳过
    pub async fn run(&self) -> anyhow::Result<()> {
        if self.theme_repo.count().await? > 0 {
            tracing::debug!("Sample data skipped, themes already present");
            return Ok(());
        }

        let themes = self.seed_themes().await?;
        let authors = self.seed_authors().await?;
        self.seed_editorials(&themes, &authors).await?;

        tracing::info!(
            themes = themes.len(),
            authors = authors.len(),
            "Sample data loaded"
        );
        Ok(())
    }

    async fn seed_themes(&self) -> anyhow::Result<Vec<Uuid>> {
        let entries = [
            ("Tecnologia", "tecnologia", "Notícias sobre tecnologia e inovação"),
            ("Saúde", "saude", "Notícias sobre saúde e bem-estar"),
            ("Economia", "economia", "Notícias sobre economia e negócios"),
            ("Esportes", "esportes", "Notícias sobre esportes e eventos"),
            ("Cultura", "cultura", "Notícias sobre cultura e arte"),
        ];

        let mut ids = Vec::with_capacity(entries.len());
        for (name, slug, description) in entries {
            let theme = Theme::new(
                ThemeName::new(name).map_err(anyhow::Error::msg)?,
                Slug::new(slug).map_err(anyhow::Error::msg)?,
                Some(description.to_string()),
            );
            self.theme_repo.save(&ThemeRecord::from(&theme)).await?;
            ids.push(*theme.id().as_uuid());
        }

        Ok(ids)
    }

    async fn seed_authors(&self) -> anyhow::Result<Vec<Uuid>> {
        let entries = [
            ("Ana Costa", "anacosta", "Jornalista de tecnologia e ciência"),
            ("João Silva", "joaosilva", "Repórter de economia e negócios"),
            ("Maria Souza", "msouza", "Crítica cultural e colunista"),
        ];

        let mut ids = Vec::with_capacity(entries.len());
        for (full_name, nickname, bio) in entries {
            let author = Author::new(
                full_name,
                Nickname::new(nickname).map_err(anyhow::Error::msg)?,
                bio,
            );
            self.author_repo.save(&AuthorRecord::from(&author)).await?;
            ids.push(*author.id().as_uuid());
        }

        Ok(ids)
    }

    async fn seed_editorials(&self, themes: &[Uuid], authors: &[Uuid]) -> anyhow::Result<()> {
        // (标题, 正文, 版式, 样式, 主题下标, 作者下标)
        let published: [(&str, &str, Layout, u8, usize, usize); 5] = [
            (
                "Inteligência Artificial revoluciona a indústria",
                "A inteligência artificial está transformando como as empresas trabalham. \
                 Novos modelos de IA conseguem realizar tarefas complexas que antes eram \
                 feitas apenas por humanos. Grandes investimentos estão sendo feitos no \
                 setor de tecnologia para desenvolver soluções cada vez mais sofisticadas.",
                Layout::Banner,
                1,
                0,
                0,
            ),
            (
                "Novos tratamentos para diabetes",
                "Pesquisadores anunciaram novas descobertas no tratamento de diabetes \
                 tipo 2. Os testes clínicos mostram resultados promissores com uma taxa \
                 de sucesso de 85%. Especialistas indicam que os medicamentos podem estar \
                 disponíveis em breve.",
                Layout::Columns,
                2,
                1,
                1,
            ),
            (
                "Mercado em alta com otimismo econômico",
                "As bolsas de valores registram uma semana positiva com investidores \
                 otimistas com as perspectivas econômicas. O dólar recua e o real ganha \
                 força. Analistas apontam que a inflação está sob controle e que há \
                 espaço para crescimento econômico.",
                Layout::Grid,
                3,
                2,
                1,
            ),
            (
                "Seleção conquista vitória espetacular",
                "Em um jogo emocionante, a seleção venceu com um placar de 3 a 1. Os \
                 torcedores lotaram o estádio para assistir ao espetáculo. O técnico \
                 comemorou a performance da equipe e projetou boas perspectivas para os \
                 próximos jogos.",
                Layout::Banner,
                1,
                3,
                2,
            ),
            (
                "Exposição de arte contemporânea atrai multidão",
                "A nova exposição de arte contemporânea no museu já atraiu mais de 10 \
                 mil visitantes. O curador destaca as obras inovadoras de artistas \
                 nacionais e internacionais. A exposição fica aberta até o final do mês.",
                Layout::Columns,
                2,
                4,
                2,
            ),
        ];

        let now = Utc::now();
        for (i, (title, body, layout, style, theme_idx, author_idx)) in
            published.into_iter().enumerate()
        {
            let mut editorial = Editorial::new(
                Title::new(title.to_string()).map_err(anyhow::Error::msg)?,
                body,
                layout,
                Style::new(style).map_err(anyhow::Error::msg)?,
            );
            editorial.set_themes(vec![ThemeId::from_uuid(themes[theme_idx])]);
            editorial.assign_author(Some(AuthorId::from_uuid(authors[author_idx])));
            editorial.publish_now().map_err(anyhow::Error::msg)?;

            // 发布时间逐条回退一天，浏览数递增，保持列表顺序可预期
            let mut record = EditorialRecord::from(&editorial);
            record.published_at = Some(now - Duration::days(i as i64));
            record.views = 10 + (i as u64) * 5;
            self.editorial_repo.save(&record).await?;
        }

        // 一篇草稿与一篇排期，保证工作流页面有内容可看
        let mut draft = Editorial::new(
            Title::new("Pauta em preparação: balanço do semestre".to_string())
                .map_err(anyhow::Error::msg)?,
            "O fechamento do semestre traz números que ainda precisam de apuração. \
             A redação está coletando dados junto às fontes oficiais.",
            Layout::Banner,
            Style::new(1).map_err(anyhow::Error::msg)?,
        );
        draft.set_themes(vec![ThemeId::from_uuid(themes[2])]);
        draft.assign_author(Some(AuthorId::from_uuid(authors[0])));
        self.editorial_repo
            .save(&EditorialRecord::from(&draft))
            .await?;

        let mut scheduled = Editorial::new(
            Title::new("Guia cultural do fim de semana".to_string())
                .map_err(anyhow::Error::msg)?,
            "A agenda do fim de semana reúne teatro, música e exposições. A seleção \
             completa sai na edição de sexta-feira.",
            Layout::Grid,
            Style::new(3).map_err(anyhow::Error::msg)?,
        );
        scheduled.set_themes(vec![ThemeId::from_uuid(themes[4])]);
        scheduled.assign_author(Some(AuthorId::from_uuid(authors[2])));
        scheduled
            .schedule(now + Duration::days(2))
            .map_err(anyhow::Error::msg)?;
        self.editorial_repo
            .save(&EditorialRecord::from(&scheduled))
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteAuthorRepository,
        SqliteEditorialRepository, SqliteThemeRepository,
    };

    async fn setup_seeder() -> (
        SampleDataSeeder,
        Arc<dyn EditorialRepositoryPort>,
        Arc<dyn ThemeRepositoryPort>,
    ) {
        let config = DatabaseConfig::in_memory();
        let pool = create_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let editorial_repo: Arc<dyn EditorialRepositoryPort> =
            Arc::new(SqliteEditorialRepository::new(pool.clone()));
        let theme_repo: Arc<dyn ThemeRepositoryPort> =
            Arc::new(SqliteThemeRepository::new(pool.clone()));
        let author_repo: Arc<dyn AuthorRepositoryPort> =
            Arc::new(SqliteAuthorRepository::new(pool));

        let seeder = SampleDataSeeder::new(
            editorial_repo.clone(),
            theme_repo.clone(),
            author_repo,
        );
        (seeder, editorial_repo, theme_repo)
    }

    #[tokio::test]
    async fn test_seed_populates_empty_database() {
        let (seeder, editorial_repo, theme_repo) = setup_seeder().await;

        seeder.run().await.unwrap();

        assert_eq!(theme_repo.count().await.unwrap(), 5);
        assert_eq!(editorial_repo.find_all().await.unwrap().len(), 7);

        // 已发布的 5 篇立即可见
        let published = editorial_repo.find_published(None).await.unwrap();
        assert_eq!(published.len(), 5);
        assert_eq!(
            published[0].title,
            "Inteligência Artificial revoluciona a indústria"
        );
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let (seeder, editorial_repo, theme_repo) = setup_seeder().await;

        seeder.run().await.unwrap();
        seeder.run().await.unwrap();

        assert_eq!(theme_repo.count().await.unwrap(), 5);
        assert_eq!(editorial_repo.find_all().await.unwrap().len(), 7);
    }
}
