use async_trait::async_trait;

use crate::modules::blog::application::ports::outgoing::{BlogQuery, BlogQueryError};
use crate::modules::content::application::domain::entities::HomePage;
use crate::modules::content::application::ports::incoming::use_cases::{
    GetHomePageError, GetHomePageUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    ContentQuery, ContentQueryError, SiteSettingsRepository, SiteSettingsRepositoryError,
};

/// Number of recent posts shown on the home page.
pub const HOME_RECENT_POSTS: u64 = 6;

pub struct GetHomePageService<C, S, B>
where
    C: ContentQuery,
    S: SiteSettingsRepository,
    B: BlogQuery,
{
    content: C,
    settings: S,
    blog: B,
}

impl<C, S, B> GetHomePageService<C, S, B>
where
    C: ContentQuery,
    S: SiteSettingsRepository,
    B: BlogQuery,
{
    pub fn new(content: C, settings: S, blog: B) -> Self {
        Self {
            content,
            settings,
            blog,
        }
    }
}

fn content_err(e: ContentQueryError) -> GetHomePageError {
    match e {
        ContentQueryError::DatabaseError(msg) => GetHomePageError::RepositoryError(msg),
    }
}

#[async_trait]
impl<C, S, B> GetHomePageUseCase for GetHomePageService<C, S, B>
where
    C: ContentQuery + Send + Sync,
    S: SiteSettingsRepository + Send + Sync,
    B: BlogQuery + Send + Sync,
{
    async fn execute(&self) -> Result<HomePage, GetHomePageError> {
        let settings = self.settings.get_or_create().await.map_err(|e| match e {
            SiteSettingsRepositoryError::DatabaseError(msg) => {
                GetHomePageError::RepositoryError(msg)
            }
        })?;

        let services = self.content.list_active_services().await.map_err(content_err)?;
        let education = self.content.list_active_education().await.map_err(content_err)?;
        let experience = self.content.list_active_experience().await.map_err(content_err)?;
        let certifications = self
            .content
            .list_active_certifications()
            .await
            .map_err(content_err)?;
        let portfolio_categories = self
            .content
            .list_portfolio_categories()
            .await
            .map_err(content_err)?;
        let portfolio_projects = self.content.list_active_projects().await.map_err(content_err)?;

        let blog_posts = self
            .blog
            .list_recent_published(HOME_RECENT_POSTS)
            .await
            .map_err(|e| match e {
                BlogQueryError::DatabaseError(msg) => GetHomePageError::RepositoryError(msg),
            })?;

        Ok(HomePage {
            settings,
            services,
            education,
            experience,
            certifications,
            portfolio_categories,
            portfolio_projects,
            blog_posts,
        })
    }
}
