use std::sync::Arc;

use crate::modules::blog::application::ports::incoming::use_cases::{
    GetBlogDetailUseCase, ListCommentsUseCase, ModerateCommentUseCase, SubmitCommentUseCase,
};

#[derive(Clone)]
pub struct BlogUseCases {
    pub get_detail: Arc<dyn GetBlogDetailUseCase + Send + Sync>,
    pub submit_comment: Arc<dyn SubmitCommentUseCase + Send + Sync>,
    pub list_comments: Arc<dyn ListCommentsUseCase + Send + Sync>,
    pub moderate_comment: Arc<dyn ModerateCommentUseCase + Send + Sync>,
}
