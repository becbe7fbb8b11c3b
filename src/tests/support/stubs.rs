use async_trait::async_trait;
use uuid::Uuid;

use crate::blog::application::domain::comment_form::CommentSubmission;
use crate::blog::application::domain::entities::{BlogDetail, Comment, CommentStatusFilter};
use crate::blog::application::ports::incoming::use_cases::{
    GetBlogDetailError, GetBlogDetailUseCase, ListCommentsError, ListCommentsUseCase,
    ModerateCommentError, ModerateCommentUseCase, SubmitCommentError, SubmitCommentUseCase,
};
use crate::blog::application::ports::outgoing::CommentWithCount;
use crate::contact::application::domain::contact_form::ContactForm;
use crate::contact::application::domain::entities::ContactSubmission;
use crate::contact::application::ports::incoming::use_cases::{
    ListContactSubmissionsError, ListContactSubmissionsUseCase, MarkContactReadError,
    MarkContactReadUseCase, SubmitContactError, SubmitContactUseCase,
};
use crate::content::application::domain::entities::{HomePage, SiteSettings};
use crate::content::application::ports::incoming::use_cases::{
    GetHomePageError, GetHomePageUseCase, GetSiteSettingsError, GetSiteSettingsUseCase,
    UpdateSiteSettingsCommand, UpdateSiteSettingsError, UpdateSiteSettingsUseCase,
};
use crate::seo::application::ports::incoming::use_cases::{
    GetRobotsUseCase, GetSitemapError, GetSitemapUseCase,
};

/* --------------------------------------------------
 * Content
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubGetHomePageUseCase;

#[async_trait]
impl GetHomePageUseCase for StubGetHomePageUseCase {
    async fn execute(&self) -> Result<HomePage, GetHomePageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSiteSettingsUseCase;

#[async_trait]
impl GetSiteSettingsUseCase for StubGetSiteSettingsUseCase {
    async fn execute(&self) -> Result<SiteSettings, GetSiteSettingsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateSiteSettingsUseCase;

#[async_trait]
impl UpdateSiteSettingsUseCase for StubUpdateSiteSettingsUseCase {
    async fn execute(
        &self,
        _command: UpdateSiteSettingsCommand,
    ) -> Result<SiteSettings, UpdateSiteSettingsError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Blog
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubGetBlogDetailUseCase;

#[async_trait]
impl GetBlogDetailUseCase for StubGetBlogDetailUseCase {
    async fn execute(&self, _slug: &str) -> Result<BlogDetail, GetBlogDetailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitCommentUseCase;

#[async_trait]
impl SubmitCommentUseCase for StubSubmitCommentUseCase {
    async fn execute(
        &self,
        _post_slug: &str,
        _submission: CommentSubmission,
    ) -> Result<CommentWithCount, SubmitCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListCommentsUseCase;

#[async_trait]
impl ListCommentsUseCase for StubListCommentsUseCase {
    async fn execute(
        &self,
        _status: CommentStatusFilter,
    ) -> Result<Vec<Comment>, ListCommentsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubModerateCommentUseCase;

#[async_trait]
impl ModerateCommentUseCase for StubModerateCommentUseCase {
    async fn execute(
        &self,
        _comment_id: Uuid,
        _is_approved: bool,
    ) -> Result<CommentWithCount, ModerateCommentError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Contact
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, _form: ContactForm) -> Result<ContactSubmission, SubmitContactError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListContactSubmissionsUseCase;

#[async_trait]
impl ListContactSubmissionsUseCase for StubListContactSubmissionsUseCase {
    async fn execute(&self) -> Result<Vec<ContactSubmission>, ListContactSubmissionsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubMarkContactReadUseCase;

#[async_trait]
impl MarkContactReadUseCase for StubMarkContactReadUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _is_read: bool,
    ) -> Result<ContactSubmission, MarkContactReadError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * SEO
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubGetSitemapUseCase;

#[async_trait]
impl GetSitemapUseCase for StubGetSitemapUseCase {
    async fn execute(&self) -> Result<String, GetSitemapError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetRobotsUseCase;

impl GetRobotsUseCase for StubGetRobotsUseCase {
    fn execute(&self) -> String {
        unimplemented!("Not used in this test")
    }
}
