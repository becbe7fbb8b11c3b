pub mod blog_query;
pub mod comment_repository;

pub use blog_query::{BlogQuery, BlogQueryError, PublishedPostRef};
pub use comment_repository::{
    CommentRepository, CommentRepositoryError, CommentWithCount, NewComment,
};
