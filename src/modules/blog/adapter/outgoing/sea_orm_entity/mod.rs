pub mod blog_posts;
pub mod comments;
