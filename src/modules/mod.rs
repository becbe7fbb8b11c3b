pub mod admin;
pub mod blog;
pub mod contact;
pub mod content;
pub mod seo;
