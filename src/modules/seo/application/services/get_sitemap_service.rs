use async_trait::async_trait;
use chrono::Utc;

use crate::modules::blog::application::ports::outgoing::{BlogQuery, BlogQueryError};
use crate::modules::seo::application::domain::sitemap::{render_urlset, SitemapEntry};
use crate::modules::seo::application::ports::incoming::use_cases::{
    GetSitemapError, GetSitemapUseCase,
};

pub struct GetSitemapService<Q>
where
    Q: BlogQuery,
{
    blog: Q,
    site_url: String,
}

impl<Q> GetSitemapService<Q>
where
    Q: BlogQuery,
{
    pub fn new(blog: Q, site_url: impl Into<String>) -> Self {
        Self {
            blog,
            site_url: site_url.into(),
        }
    }
}

#[async_trait]
impl<Q> GetSitemapUseCase for GetSitemapService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self) -> Result<String, GetSitemapError> {
        let posts = self
            .blog
            .list_published_for_sitemap()
            .await
            .map_err(|e| match e {
                BlogQueryError::DatabaseError(msg) => GetSitemapError::RepositoryError(msg),
            })?;

        let home_lastmod = posts
            .iter()
            .map(|p| p.updated_at)
            .max()
            .unwrap_or_else(Utc::now)
            .date_naive();

        let entries: Vec<SitemapEntry> = std::iter::once(SitemapEntry::home(
            &self.site_url,
            home_lastmod,
        ))
        .chain(posts.iter().map(|p| {
            SitemapEntry::post(&self.site_url, &p.slug, p.updated_at.date_naive())
        }))
        .collect();

        Ok(render_urlset(&entries))
    }
}
