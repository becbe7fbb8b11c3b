use std::sync::Arc;

use crate::modules::seo::application::ports::incoming::use_cases::{
    GetRobotsUseCase, GetSitemapUseCase,
};

#[derive(Clone)]
pub struct SeoUseCases {
    pub sitemap: Arc<dyn GetSitemapUseCase + Send + Sync>,
    pub robots: Arc<dyn GetRobotsUseCase + Send + Sync>,
}
