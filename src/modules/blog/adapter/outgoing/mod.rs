mod blog_query_postgres;
mod comment_repository_postgres;
pub mod sea_orm_entity;

pub use blog_query_postgres::BlogQueryPostgres;
pub use comment_repository_postgres::CommentRepositoryPostgres;
