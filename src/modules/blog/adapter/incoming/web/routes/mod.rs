mod admin_comments;
mod get_blog_detail;
mod submit_comment;

pub use admin_comments::*;
pub use get_blog_detail::*;
pub use submit_comment::*;
