mod get_blog_detail;
mod list_comments;
mod moderate_comment;
mod submit_comment;

pub use get_blog_detail::{GetBlogDetailError, GetBlogDetailUseCase};
pub use list_comments::{ListCommentsError, ListCommentsUseCase};
pub use moderate_comment::{ModerateCommentError, ModerateCommentUseCase};
pub use submit_comment::{
    SubmitCommentError, SubmitCommentUseCase, COMMENT_ACCEPTED_MESSAGE, SPAM_REJECTED_MESSAGE,
};
