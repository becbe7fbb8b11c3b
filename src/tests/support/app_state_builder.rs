use actix_web::web;
use std::sync::Arc;

use crate::blog::application::blog_use_cases::BlogUseCases;
use crate::blog::application::ports::incoming::use_cases::{
    GetBlogDetailUseCase, ListCommentsUseCase, ModerateCommentUseCase, SubmitCommentUseCase,
};
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::incoming::use_cases::{
    ListContactSubmissionsUseCase, MarkContactReadUseCase, SubmitContactUseCase,
};
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::ports::incoming::use_cases::{
    GetHomePageUseCase, GetSiteSettingsUseCase, UpdateSiteSettingsUseCase,
};
use crate::seo::application::ports::incoming::use_cases::{GetRobotsUseCase, GetSitemapUseCase};
use crate::seo::application::seo_use_cases::SeoUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` whose use cases are stubs unless a test swaps one in.
pub struct TestAppStateBuilder {
    content: ContentUseCases,
    blog: BlogUseCases,
    contact: ContactUseCases,
    seo: SeoUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            content: ContentUseCases {
                get_home_page: Arc::new(StubGetHomePageUseCase),
                get_settings: Arc::new(StubGetSiteSettingsUseCase),
                update_settings: Arc::new(StubUpdateSiteSettingsUseCase),
            },
            blog: BlogUseCases {
                get_detail: Arc::new(StubGetBlogDetailUseCase),
                submit_comment: Arc::new(StubSubmitCommentUseCase),
                list_comments: Arc::new(StubListCommentsUseCase),
                moderate_comment: Arc::new(StubModerateCommentUseCase),
            },
            contact: ContactUseCases {
                submit: Arc::new(StubSubmitContactUseCase),
                list: Arc::new(StubListContactSubmissionsUseCase),
                mark_read: Arc::new(StubMarkContactReadUseCase),
            },
            seo: SeoUseCases {
                sitemap: Arc::new(StubGetSitemapUseCase),
                robots: Arc::new(StubGetRobotsUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Content
    pub fn with_get_home_page(
        mut self,
        uc: impl GetHomePageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.get_home_page = Arc::new(uc);
        self
    }

    pub fn with_get_settings(
        mut self,
        uc: impl GetSiteSettingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.get_settings = Arc::new(uc);
        self
    }

    pub fn with_update_settings(
        mut self,
        uc: impl UpdateSiteSettingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.content.update_settings = Arc::new(uc);
        self
    }

    // Blog
    pub fn with_get_blog_detail(
        mut self,
        uc: impl GetBlogDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.get_detail = Arc::new(uc);
        self
    }

    pub fn with_submit_comment(
        mut self,
        uc: impl SubmitCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.submit_comment = Arc::new(uc);
        self
    }

    pub fn with_list_comments(
        mut self,
        uc: impl ListCommentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.list_comments = Arc::new(uc);
        self
    }

    pub fn with_moderate_comment(
        mut self,
        uc: impl ModerateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.blog.moderate_comment = Arc::new(uc);
        self
    }

    // Contact
    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.submit = Arc::new(uc);
        self
    }

    pub fn with_list_contact_submissions(
        mut self,
        uc: impl ListContactSubmissionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.list = Arc::new(uc);
        self
    }

    pub fn with_mark_contact_read(
        mut self,
        uc: impl MarkContactReadUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.mark_read = Arc::new(uc);
        self
    }

    // SEO
    pub fn with_get_sitemap(
        mut self,
        uc: impl GetSitemapUseCase + Send + Sync + 'static,
    ) -> Self {
        self.seo.sitemap = Arc::new(uc);
        self
    }

    pub fn with_get_robots(mut self, uc: impl GetRobotsUseCase + Send + Sync + 'static) -> Self {
        self.seo.robots = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: self.content,
            blog: self.blog,
            contact: self.contact,
            seo: self.seo,
        })
    }
}
