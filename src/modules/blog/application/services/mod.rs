mod get_blog_detail_service;
mod list_comments_service;
mod moderate_comment_service;
mod submit_comment_service;

pub use get_blog_detail_service::GetBlogDetailService;
pub use list_comments_service::ListCommentsService;
pub use moderate_comment_service::ModerateCommentService;
pub use submit_comment_service::SubmitCommentService;
